pub mod ast;
pub mod check;
pub mod dot;
pub mod generate;
pub mod graph_loader;
pub mod info;
pub mod output;
pub mod program_loader;
pub mod run;
