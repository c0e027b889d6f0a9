// common helpers 
pub mod algorithms; 
pub mod report; 
pub mod errors; 
pub mod config;
pub(crate) mod signs; 
pub(crate) mod tolerances; 

// algorithms 
pub mod bisection;
pub mod secant;
pub mod newton;

// driver 
pub mod scan; 
