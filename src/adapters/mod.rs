// Adapters layer: concrete capabilities the greeter writes to (console, in-memory sinks, pages).

pub mod page;
pub mod sink;

pub use page::Page;
pub use sink::{MemorySink, StdoutSink};
