pub mod metadata_client;

pub use metadata_client::MetadataClient;
#[cfg(test)]
pub use metadata_client::MockMetadataClient;
