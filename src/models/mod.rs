// (C) Copyright IBM Corp. 2025.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Models shared by indexing, compression and reporting.
//!
//! Indexed files and parsed options are converted to these types as soon as
//! possible, and every later stage works on them only.

mod media_file;
mod media_type;
mod options;

pub use media_file::MediaFile;
pub use media_type::{ExtensionTable, MediaType};
pub use options::{CompressOptions, TargetFormat};
