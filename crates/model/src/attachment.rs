//! Connector file attachments
//!
//! A connector form can carry up to three binary files. They are uploaded
//! before the record is saved and the returned paths are written into the
//! connector's path fields.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The three attachment slots of a connector
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentSlot {
    Image,
    Drawing2d,
    Model3d,
}

impl AttachmentSlot {
    /// All slots in upload order
    pub const ALL: [AttachmentSlot; 3] = [
        AttachmentSlot::Image,
        AttachmentSlot::Drawing2d,
        AttachmentSlot::Model3d,
    ];

    /// 1-based slot number used by the upload endpoint
    pub fn number(&self) -> u8 {
        match self {
            AttachmentSlot::Image => 1,
            AttachmentSlot::Drawing2d => 2,
            AttachmentSlot::Model3d => 3,
        }
    }

    /// Look a slot up by its upload number
    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.number() == number)
    }

    /// Multipart field carrying the file bytes
    pub fn field_name(&self) -> &'static str {
        match self {
            AttachmentSlot::Image => "file1",
            AttachmentSlot::Drawing2d => "file2",
            AttachmentSlot::Model3d => "file3",
        }
    }

    /// Multipart field naming the target subdirectory
    pub fn subdir_field(&self) -> &'static str {
        match self {
            AttachmentSlot::Image => "subdir1",
            AttachmentSlot::Drawing2d => "subdir2",
            AttachmentSlot::Model3d => "subdir3",
        }
    }

    /// Storage subdirectory under the media root
    pub fn subdir(&self) -> &'static str {
        match self {
            AttachmentSlot::Image => "images",
            AttachmentSlot::Drawing2d => "2d_drawing_files",
            AttachmentSlot::Model3d => "3d_drawing_files",
        }
    }

    /// Label shown next to the file picker
    pub fn label(&self) -> &'static str {
        match self {
            AttachmentSlot::Image => "Image",
            AttachmentSlot::Drawing2d => "2D Drawing",
            AttachmentSlot::Model3d => "3D Model",
        }
    }

    /// File extensions offered by the picker
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            AttachmentSlot::Image => &["png", "jpg", "jpeg", "gif", "webp"],
            AttachmentSlot::Drawing2d => &["pdf", "dwg", "dxf", "png", "jpg"],
            AttachmentSlot::Model3d => &["step", "stp", "igs", "iges", "stl"],
        }
    }
}

impl fmt::Display for AttachmentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A file picked for upload
#[derive(Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl Attachment {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Extension of the original file, lowercased, without the dot
    pub fn extension(&self) -> Option<String> {
        let (_, ext) = self.file_name.rsplit_once('.')?;
        (!ext.is_empty()).then(|| ext.to_ascii_lowercase())
    }
}

impl fmt::Debug for Attachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attachment")
            .field("file_name", &self.file_name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Pending attachments of a connector form, keyed by slot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attachments {
    files: BTreeMap<AttachmentSlot, Attachment>,
}

impl Attachments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a file into a slot, replacing any previous pick
    pub fn set(&mut self, slot: AttachmentSlot, attachment: Attachment) {
        self.files.insert(slot, attachment);
    }

    pub fn clear(&mut self, slot: AttachmentSlot) {
        self.files.remove(&slot);
    }

    pub fn get(&self, slot: AttachmentSlot) -> Option<&Attachment> {
        self.files.get(&slot)
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Picked files in slot order
    pub fn iter(&self) -> impl Iterator<Item = (AttachmentSlot, &Attachment)> {
        self.files.iter().map(|(slot, file)| (*slot, file))
    }
}

/// Paths returned by the upload endpoint, keyed by slot
pub type UploadedPaths = BTreeMap<AttachmentSlot, String>;
