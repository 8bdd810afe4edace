pub mod errors;

use std::fmt;
use std::sync::Arc;
use bytes::Bytes;
use log::{debug, info};
use object_store::aws::AmazonS3Builder;
use object_store::path::Path;
use object_store::ObjectStore;
use tokio::runtime::{Builder, Runtime};
use crate::config::StorageParameters;
use crate::manager_storage::errors::StorageError;

/// Where a payload ends up
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectLocation {
    pub bucket: String,
    pub key: String,
}

impl fmt::Display for ObjectLocation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "s3://{}/{}", self.bucket, self.key)
    }
}

/// Struct for writing payloads to a fixed bucket and key in object storage
pub struct Storage {
    store: Arc<dyn ObjectStore>,
    location: ObjectLocation,
    runtime: Runtime,
}

impl Storage {
    /// Returns a storage struct writing to S3 (or any S3 compatible store).
    /// Connection details are picked up from the standard AWS environment variables,
    /// and any value given in the configuration overrides them.
    ///
    /// # Arguments
    ///
    /// * 'config' - storage configuration to use
    pub fn new(config: &StorageParameters) -> Result<Storage, StorageError> {
        let mut builder = AmazonS3Builder::from_env()
            .with_bucket_name(&config.bucket);

        if let Some(region) = &config.region {
            builder = builder.with_region(region);
        }
        if let Some(endpoint) = &config.endpoint {
            builder = builder.with_endpoint(endpoint);
        }
        if let Some(access_key_id) = &config.access_key_id {
            builder = builder.with_access_key_id(access_key_id);
        }
        if let Some(secret_access_key) = &config.secret_access_key {
            builder = builder.with_secret_access_key(secret_access_key);
        }
        if config.allow_http {
            builder = builder.with_allow_http(true);
        }

        let store = builder
            .build()
            .map_err(|e| StorageError::SetupError(format!("S3 client: {}", e)))?;

        Storage::with_store(Arc::new(store), &config.bucket, &config.key)
    }

    /// Returns a storage struct writing through the given store
    ///
    /// # Arguments
    ///
    /// * 'store' - object store to write to, already bound to 'bucket'
    /// * 'bucket' - name of the bucket
    /// * 'key' - key to write payloads to
    pub fn with_store(store: Arc<dyn ObjectStore>, bucket: &str, key: &str) -> Result<Storage, StorageError> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()?;

        Ok(Storage {
            store,
            location: ObjectLocation {
                bucket: bucket.to_string(),
                key: key.to_string(),
            },
            runtime,
        })
    }

    pub fn location(&self) -> &ObjectLocation {
        &self.location
    }

    /// Writes the payload verbatim to the configured key, replacing whatever object was there
    ///
    /// # Arguments
    ///
    /// * 'payload' - text to store
    pub fn upload(&self, payload: String) -> Result<ObjectLocation, StorageError> {
        let path = Path::from(self.location.key.as_str());
        let data = Bytes::from(payload);
        debug!("Writing {} bytes to {}", data.len(), self.location);

        self.runtime.block_on(self.store.put(&path, data))?;
        info!("Payload stored at {}", self.location);

        Ok(self.location.clone())
    }
}
