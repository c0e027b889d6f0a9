//! Root-finding algorithm definitions.  
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods, 
//! along with the shared [`DEFAULT_MAX_ITER`] iteration budget.  


/// Iteration budget for open methods when `max_iter` is not set.
pub const DEFAULT_MAX_ITER: usize = 100; 


/// Root-finding algorithm variants. 
/// - [`Algorithm::Bracket`] contains bracket methods for root-finding 
/// - [`Algorithm::Open`]    contains open methods for root-finding 
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm { 
    Bracket(BracketFamily), 
    Open(OpenFamily),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BracketFamily { 
    Bisection,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OpenFamily { 
    Secant, 
    Newton
}

impl Algorithm { 
    pub const BISECTION: Algorithm = Algorithm::Bracket(BracketFamily::Bisection); 
    pub const NEWTON:    Algorithm = Algorithm::Open(OpenFamily::Newton); 
    pub const SECANT:    Algorithm = Algorithm::Open(OpenFamily::Secant); 

    /// Default iteration count if `max_iter` is unset in config. 
    ///  
    /// # Notes 
    /// - [`BracketFamily::Bisection`] returns `None`: it is terminated by the 
    ///   bracket width alone, each step halving it.  
    /// - Open methods share [`DEFAULT_MAX_ITER`].  
    pub const fn default_max_iter(self) -> Option<usize> { 
        match self { 
            Algorithm::Bracket(BracketFamily::Bisection) => None, 
            Algorithm::Open(OpenFamily::Secant)          => Some(DEFAULT_MAX_ITER), 
            Algorithm::Open(OpenFamily::Newton)          => Some(DEFAULT_MAX_ITER), 
        }
    }

    pub const fn algorithm_name(self) -> &'static str { 
        match self { 
            Algorithm::Bracket(BracketFamily::Bisection) => "bisection", 
            Algorithm::Open(OpenFamily::Secant)          => "secant", 
            Algorithm::Open(OpenFamily::Newton)          => "newton",
        }
    }
}
impl std::fmt::Display for Algorithm { 
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { 
        write!(f, "{}", self.algorithm_name())
    }
}
