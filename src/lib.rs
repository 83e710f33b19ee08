pub mod assemble;
pub mod cli;
pub mod epub;
pub mod error;
pub mod fragment;
pub mod scan;
pub mod util;
