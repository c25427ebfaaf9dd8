//! Interned, structurally-decomposed asset path strings.
//!
//! This module defines [`InternedPath`], the path type used as the key of the
//! status database and the currency of the whole command chain. Asset trees
//! reach tens of thousands of paths and the decorators perform a huge volume
//! of equality, suffix and concatenation operations on them, so paths are
//! canonicalized through a global intern pool: two values built from equal
//! normalized strings share one allocation, making equality a pointer compare
//! and hashing a replay of a cached value.
//!
//! # Public API
//! - [`InternedPath`]: Main interned path value type
//!
//! # Key Features
//! - **O(1) equality and hashing**: pool canonicalization after construction
//! - **Separator normalization**: backslashes become forward slashes
//! - **Suffix operations**: `concat`/`ends_with`/`trim_end` form inverse pairs
//! - **Segment decomposition**: iterate `/`-separated path components

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Global pool of canonicalized path data, keyed by the normalized string.
/// Entries live for the process lifetime; eviction never happens here, the
/// status database handles its own eviction at the record level.
static POOL: Lazy<RwLock<HashMap<String, Arc<PathData>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

#[derive(Debug)]
struct PathData {
    /// Full normalized string form.
    text: String,
    /// Byte offset one past the end of each `/`-separated segment.
    segment_ends: Vec<u32>,
    /// Hash of `text`, computed once at intern time.
    hash: u64,
}

/// A canonicalized, forward-slash-delimited hierarchical path.
///
/// Values constructed from equal strings share one pooled allocation, whether
/// they were built from a literal or via [`concat`](InternedPath::concat), so
/// equality, hashing and cloning are all cheap. The value is immutable after
/// construction.
#[derive(Clone)]
pub struct InternedPath(Arc<PathData>);

impl InternedPath {
    /// Construct an interned path from a raw string.
    ///
    /// Always succeeds; backslash separators are normalized to forward
    /// slashes and the empty string is a valid (degenerate) path.
    pub fn new(raw: impl AsRef<str>) -> Self {
        let raw = raw.as_ref();
        if raw.contains('\\') {
            Self(intern(raw.replace('\\', "/")))
        } else {
            Self(intern_borrowed(raw))
        }
    }

    /// The full normalized string form.
    pub fn as_str(&self) -> &str {
        &self.0.text
    }

    /// Length of the string form in bytes.
    pub fn len(&self) -> usize {
        self.0.text.len()
    }

    /// True for the degenerate empty path.
    pub fn is_empty(&self) -> bool {
        self.0.text.is_empty()
    }

    /// Return a new interned path whose string form is `self` followed by
    /// `suffix`. The original value is untouched.
    pub fn concat(&self, suffix: &str) -> InternedPath {
        if suffix.is_empty() {
            return self.clone();
        }
        let mut text = String::with_capacity(self.0.text.len() + suffix.len());
        text.push_str(&self.0.text);
        text.push_str(suffix);
        InternedPath::new(text)
    }

    /// True iff the string form ends with `suffix`.
    ///
    /// The suffix is an extension-style text fragment, not a segment: a
    /// trailing `".meta"` matches even though it is not a whole path
    /// component. An empty suffix never matches anything, by contract.
    pub fn ends_with(&self, suffix: &str) -> bool {
        !suffix.is_empty() && self.0.text.ends_with(suffix)
    }

    /// Remove a trailing `suffix` if present; otherwise return the path
    /// unchanged. Inverse of [`concat`](InternedPath::concat) for any suffix
    /// the path actually carries.
    pub fn trim_end(&self, suffix: &str) -> InternedPath {
        if self.ends_with(suffix) {
            InternedPath::new(&self.0.text[..self.0.text.len() - suffix.len()])
        } else {
            self.clone()
        }
    }

    /// Iterate the `/`-separated segments of the path.
    ///
    /// The empty path has no segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        let text = self.0.text.as_str();
        let ends = self.0.segment_ends.iter();
        let mut start = 0usize;
        ends.map(move |&end| {
            let seg = &text[start..end as usize];
            start = end as usize + 1;
            seg
        })
    }

    /// Number of `/`-separated segments.
    pub fn segment_count(&self) -> usize {
        self.0.segment_ends.len()
    }
}

fn decompose(text: &str) -> Vec<u32> {
    if text.is_empty() {
        return Vec::new();
    }
    let mut ends = Vec::new();
    for (idx, byte) in text.bytes().enumerate() {
        if byte == b'/' {
            ends.push(idx as u32);
        }
    }
    ends.push(text.len() as u32);
    ends
}

fn hash_text(text: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    text.hash(&mut hasher);
    hasher.finish()
}

fn intern_borrowed(normalized: &str) -> Arc<PathData> {
    if let Some(data) = POOL.read().get(normalized) {
        return Arc::clone(data);
    }
    intern(normalized.to_string())
}

fn intern(normalized: String) -> Arc<PathData> {
    if let Some(data) = POOL.read().get(&normalized) {
        return Arc::clone(data);
    }
    let mut pool = POOL.write();
    // A racing writer may have inserted between the read and write locks.
    if let Some(data) = pool.get(&normalized) {
        return Arc::clone(data);
    }
    let data = Arc::new(PathData {
        segment_ends: decompose(&normalized),
        hash: hash_text(&normalized),
        text: normalized.clone(),
    });
    pool.insert(normalized, Arc::clone(&data));
    data
}

impl PartialEq for InternedPath {
    fn eq(&self, other: &Self) -> bool {
        // Pool canonicalization guarantees equal strings share one Arc.
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for InternedPath {}

impl Hash for InternedPath {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.0.hash);
    }
}

impl PartialOrd for InternedPath {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for InternedPath {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.text.cmp(&other.0.text)
    }
}

impl fmt::Display for InternedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.text)
    }
}

impl fmt::Debug for InternedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InternedPath({:?})", self.0.text)
    }
}

impl Default for InternedPath {
    fn default() -> Self {
        InternedPath::new("")
    }
}

impl From<&str> for InternedPath {
    fn from(raw: &str) -> Self {
        InternedPath::new(raw)
    }
}

impl From<String> for InternedPath {
    fn from(raw: String) -> Self {
        InternedPath::new(raw)
    }
}

impl Serialize for InternedPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.text)
    }
}

impl<'de> Deserialize<'de> for InternedPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(InternedPath::new(raw))
    }
}
