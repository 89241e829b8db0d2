// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Defines the hierarchy of error types for the rendering subsystem.

use crate::renderer::api::TextureId;
use std::fmt;

/// An error related to the creation or use of a texture resource.
#[derive(Debug)]
pub enum ResourceError {
    /// The pixel buffer does not match the declared texture dimensions.
    InvalidPixelData {
        /// The number of bytes that were expected.
        expected: usize,
        /// The number of bytes that were provided.
        actual: usize,
    },
    /// A texture with zero width or height was requested.
    EmptyTexture,
    /// The handle used to reference a texture is unknown to the backend.
    InvalidHandle(TextureId),
    /// An error originating from the specific graphics backend implementation.
    BackendError(String),
}

impl fmt::Display for ResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceError::InvalidPixelData { expected, actual } => {
                write!(
                    f,
                    "Texture pixel data has {actual} bytes, expected {expected}."
                )
            }
            ResourceError::EmptyTexture => write!(f, "Texture has an empty extent."),
            ResourceError::InvalidHandle(id) => write!(f, "Invalid texture handle: {id:?}"),
            ResourceError::BackendError(msg) => {
                write!(f, "Backend-specific resource error: {msg}")
            }
        }
    }
}

impl std::error::Error for ResourceError {}

/// A high-level error that can occur within the primitive renderer.
#[derive(Debug)]
pub enum RenderError {
    /// A failure occurred while preparing the renderer's built-in resources.
    InitializationFailed(String),
    /// An error occurred while managing a texture resource.
    ResourceError(ResourceError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::InitializationFailed(msg) => {
                write!(f, "Failed to initialize renderer: {msg}")
            }
            RenderError::ResourceError(err) => {
                write!(f, "Graphics resource operation failed: {err}")
            }
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::ResourceError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ResourceError> for RenderError {
    fn from(err: ResourceError) -> Self {
        RenderError::ResourceError(err)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn resource_error_display() {
        let err = ResourceError::InvalidPixelData {
            expected: 16,
            actual: 12,
        };
        assert_eq!(
            format!("{err}"),
            "Texture pixel data has 12 bytes, expected 16."
        );
    }

    #[test]
    fn render_error_display_wrapping_resource_error() {
        let render_err: RenderError = ResourceError::InvalidHandle(TextureId(7)).into();
        assert_eq!(
            format!("{render_err}"),
            "Graphics resource operation failed: Invalid texture handle: TextureId(7)"
        );
        assert!(render_err.source().is_some());
    }
}
