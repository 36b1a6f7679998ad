pub mod ports;

pub use ports::MetadataClient;
