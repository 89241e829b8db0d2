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

//! Concrete implementations of the services `tabula-core` defines.
//!
//! Nothing in here is required by the renderer or the audio manager: they
//! only see the traits. The crate exists so that a client can be assembled
//! without a game engine, either headless or with a real output device.

#![warn(missing_docs)]

pub mod audio;
pub mod graphics;
pub mod text;
