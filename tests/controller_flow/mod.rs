pub mod support;

mod drawing;
mod editing;
mod export_flow;
mod file_io;
mod selection_flow;
