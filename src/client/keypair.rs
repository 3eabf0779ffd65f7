//! Key-pair management. All three operations are synchronous on the
//! provider side; none of them polls.

use tracing::debug;

use crate::service::{
    CreateKeyPairInput, DeleteKeyPairsInput, DescribeKeyPairsInput, KeyPair,
};

use super::{ClientError, QingCloudClient, ensure_ok};

impl QingCloudClient {
    /// Registers a public key and returns the ID the provider assigned.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] when the provider rejects the key and
    /// [`ClientError::Service`] on transport failures.
    pub async fn create_key_pair(
        &self,
        keypair_name: &str,
        public_key: &str,
    ) -> Result<String, ClientError> {
        debug!(keypair_name, "registering public key");
        let input = CreateKeyPairInput {
            zone: self.zone.clone(),
            keypair_name: keypair_name.to_owned(),
            mode: String::from("user"),
            public_key: public_key.to_owned(),
        };
        let output = self.keypair.create_key_pair(&input).await?;
        ensure_ok("CreateKeyPair", &output)?;
        Ok(output.keypair_id)
    }

    /// Reads the record for one key pair.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::KeyPairNotFound`] when the result set is
    /// empty, distinct from transport failures.
    pub async fn describe_key_pair(&self, keypair_id: &str) -> Result<KeyPair, ClientError> {
        let input = DescribeKeyPairsInput {
            zone: self.zone.clone(),
            keypairs: vec![keypair_id.to_owned()],
        };
        let output = self.keypair.describe_key_pairs(&input).await?;
        ensure_ok("DescribeKeyPairs", &output)?;
        output
            .keypair_set
            .into_iter()
            .next()
            .ok_or_else(|| ClientError::KeyPairNotFound {
                keypair_id: keypair_id.to_owned(),
            })
    }

    /// Deletes one key pair.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] when the provider rejects the deletion
    /// and [`ClientError::Service`] on transport failures.
    pub async fn delete_key_pair(&self, keypair_id: &str) -> Result<(), ClientError> {
        let input = DeleteKeyPairsInput {
            zone: self.zone.clone(),
            keypairs: vec![keypair_id.to_owned()],
        };
        let output = self.keypair.delete_key_pairs(&input).await?;
        ensure_ok("DeleteKeyPairs", &output)
    }
}
