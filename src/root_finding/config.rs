//! Shared configuration for root-finding algorithms.  
//! 
//! Provides [`CommonCfg`] with the default tolerance and iteration limit, 
//! embedded by every method config.
//!
//! [`CommonCfg`] — universal fields  
//! ├ `epsilon`  : width / step / |f(x)| tolerance  
//! └ `max_iter` : iteration cap (optional, open methods only) 
//!
//! Method configs gain validated setters through two macros:  
//! ├ `impl_common_cfg!`    : `set_epsilon`  
//! └ `impl_iteration_cfg!` : `set_max_iter`  
//!
//! Setters reject invalid values, so a solver never sees a bad config.


pub const DEFAULT_EPSILON: f64 = 1e-4;


#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CommonCfg {
    epsilon:  f64,
    max_iter: Option<usize>,
}

impl CommonCfg {
    pub fn new() -> Self {
        Self { 
            epsilon  : DEFAULT_EPSILON, 
            max_iter : None 
        }
    }

    // getters  
    pub fn epsilon(&self)  -> f64 { self.epsilon }
    pub fn max_iter(&self) -> Option<usize> { self.max_iter }

    // setters (internal) 
    pub(crate) fn with_epsilon  (&mut self, v: f64)   { self.epsilon  = v; }
    pub(crate) fn with_max_iter (&mut self, v: usize) { self.max_iter = Some(v); }
}

impl Default for CommonCfg { 
    fn default() -> Self { Self::new() }
}

macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl $cfg {
            pub fn set_epsilon(
                mut self, v: f64
            ) -> Result<Self, $crate::root_finding::errors::ToleranceError> {
                if !v.is_finite() || v <= 0.0 {
                    return Err(
                        $crate::root_finding::errors::ToleranceError::InvalidEpsilon { got: v }
                    );
                }
                self.common.with_epsilon(v);
                Ok(self)
            }

            #[inline] 
            #[must_use] 
            pub fn epsilon(&self) -> f64 { self.common.epsilon() }
        }
    };
}
pub(crate) use impl_common_cfg; 

macro_rules! impl_iteration_cfg {
    ($cfg:ty, $algorithm:expr) => {
        impl $cfg {
            pub fn set_max_iter(
                mut self, v: usize
            ) -> Result<Self, $crate::root_finding::errors::RootFindingError> {
                if v == 0 {
                    return Err(
                        $crate::root_finding::errors::RootFindingError::InvalidMaxIter { got: v }
                    );
                }
                self.common.with_max_iter(v);
                Ok(self)
            }

            /// Configured cap, else the algorithm default. 
            #[inline] 
            #[must_use] 
            pub fn max_iter(&self) -> usize { 
                self.common.max_iter().unwrap_or_else(|| {
                    $algorithm
                        .default_max_iter()
                        .unwrap_or($crate::root_finding::algorithms::DEFAULT_MAX_ITER)
                })
            }
        }
    };
}
pub(crate) use impl_iteration_cfg; 
