//! Run-instance request parameters and builder.

use super::error::ClientError;

/// Parameters required to create a new instance.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RunInstanceRequest {
    /// Number of virtual CPUs.
    pub cpu: u32,
    /// Memory in megabytes.
    pub memory: u32,
    /// Image the instance boots from.
    pub image_id: String,
    /// Key pair injected for login; the client always requests key-pair
    /// login mode.
    pub login_key_pair: String,
    /// Private network the instance joins. The returned record's private IP
    /// is allocated on this network.
    pub vx_net: String,
    /// Optional display name; the provider assigns one when empty.
    pub instance_name: String,
}

impl RunInstanceRequest {
    /// Starts a builder for a [`RunInstanceRequest`].
    #[must_use]
    pub fn builder() -> RunInstanceRequestBuilder {
        RunInstanceRequestBuilder::new()
    }

    /// Validates the request, returning a descriptive error when a required
    /// field is missing.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Validation`] when a required field is empty or
    /// zero.
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.cpu == 0 {
            return Err(ClientError::Validation(String::from("cpu")));
        }
        if self.memory == 0 {
            return Err(ClientError::Validation(String::from("memory")));
        }
        if self.image_id.is_empty() {
            return Err(ClientError::Validation(String::from("image_id")));
        }
        if self.login_key_pair.is_empty() {
            return Err(ClientError::Validation(String::from("login_key_pair")));
        }
        if self.vx_net.is_empty() {
            return Err(ClientError::Validation(String::from("vx_net")));
        }
        Ok(())
    }
}

/// Builder for [`RunInstanceRequest`] that defers trimming and validation to
/// construction.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RunInstanceRequestBuilder {
    cpu: u32,
    memory: u32,
    image_id: String,
    login_key_pair: String,
    vx_net: String,
    instance_name: String,
}

impl RunInstanceRequestBuilder {
    /// Creates an empty builder; fields must be populated before build.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the CPU count.
    #[must_use]
    pub const fn cpu(mut self, value: u32) -> Self {
        self.cpu = value;
        self
    }

    /// Sets the memory in megabytes.
    #[must_use]
    pub const fn memory(mut self, value: u32) -> Self {
        self.memory = value;
        self
    }

    /// Sets the boot image.
    #[must_use]
    pub fn image_id(mut self, value: impl Into<String>) -> Self {
        self.image_id = value.into();
        self
    }

    /// Sets the login key pair.
    #[must_use]
    pub fn login_key_pair(mut self, value: impl Into<String>) -> Self {
        self.login_key_pair = value.into();
        self
    }

    /// Sets the private network.
    #[must_use]
    pub fn vx_net(mut self, value: impl Into<String>) -> Self {
        self.vx_net = value.into();
        self
    }

    /// Sets the display name.
    #[must_use]
    pub fn instance_name(mut self, value: impl Into<String>) -> Self {
        self.instance_name = value.into();
        self
    }

    /// Builds and validates the [`RunInstanceRequest`], trimming string
    /// inputs.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Validation`] when a required field is empty or
    /// zero.
    pub fn build(self) -> Result<RunInstanceRequest, ClientError> {
        let request = RunInstanceRequest {
            cpu: self.cpu,
            memory: self.memory,
            image_id: self.image_id.trim().to_owned(),
            login_key_pair: self.login_key_pair.trim().to_owned(),
            vx_net: self.vx_net.trim().to_owned(),
            instance_name: self.instance_name.trim().to_owned(),
        };
        request.validate()?;
        Ok(request)
    }
}
