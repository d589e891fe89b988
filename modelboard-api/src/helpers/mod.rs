pub mod logging;
pub mod upstream;
