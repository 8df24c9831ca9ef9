//! Resource/view identities and the table that owns the objects they name.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::format::DxgiFormat;

/// Stable identity of a captured resource.
///
/// The resource itself is owned by whatever table handed out the id; ranges and views only
/// compare ids.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceId(u64);

impl ResourceId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "resource#{}", self.0)
    }
}

/// Stable identity of a captured view object.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(u64);

impl ViewId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "view#{}", self.0)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ResourceDimension {
    Unknown,
    Buffer,
    Texture1D,
    Texture2D,
    Texture3D,
}

/// The parts of a resource's creation descriptor needed when a view does not carry its own
/// format.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ResourceInfo {
    pub dimension: ResourceDimension,
    pub format: DxgiFormat,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ViewKind {
    ShaderResource,
    UnorderedAccess,
    RenderTarget,
    DepthStencil,
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ViewKind::ShaderResource => "shader_resource",
            ViewKind::UnorderedAccess => "unordered_access",
            ViewKind::RenderTarget => "render_target",
            ViewKind::DepthStencil => "depth_stencil",
        };
        f.write_str(s)
    }
}

/// Lookup interface over the objects tracked by the capture layer.
pub trait ResourceTable {
    /// Declared dimension and format of a live resource.
    fn resource_info(&self, id: ResourceId) -> Option<ResourceInfo>;

    fn owns_resource(&self, id: ResourceId) -> bool {
        self.resource_info(id).is_some()
    }

    /// Resource a live view of kind `kind` was created over.
    fn view_resource(&self, kind: ViewKind, id: ViewId) -> Option<ResourceId>;

    /// Whether `id` names a live view of kind `kind` created through this table.
    fn owns_view(&self, kind: ViewKind, id: ViewId) -> bool {
        self.view_resource(kind, id).is_some()
    }
}

/// In-memory [`ResourceTable`].
#[derive(Debug, Default)]
pub struct ResourceRegistry {
    resources: HashMap<ResourceId, ResourceInfo>,
    views: HashMap<(ViewKind, ViewId), ResourceId>,
}

impl ResourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a resource, returning the info it replaced if the id was already live.
    pub fn insert_resource(&mut self, id: ResourceId, info: ResourceInfo) -> Option<ResourceInfo> {
        self.resources.insert(id, info)
    }

    /// Removes a resource together with every view created over it.
    pub fn remove_resource(&mut self, id: ResourceId) -> Option<ResourceInfo> {
        let info = self.resources.remove(&id)?;
        self.views.retain(|_, resource| *resource != id);
        Some(info)
    }

    /// Registers a view over `resource`. Returns `false` (and registers nothing) when the
    /// resource is not live.
    pub fn insert_view(&mut self, kind: ViewKind, id: ViewId, resource: ResourceId) -> bool {
        if !self.resources.contains_key(&resource) {
            return false;
        }
        self.views.insert((kind, id), resource);
        true
    }

    /// Unregisters a view. Returns `false` if it was not live.
    pub fn remove_view(&mut self, kind: ViewKind, id: ViewId) -> bool {
        self.views.remove(&(kind, id)).is_some()
    }

    /// Every live view over `resource`, in no particular order.
    pub fn views_of(&self, resource: ResourceId) -> HashSet<(ViewKind, ViewId)> {
        self.views
            .iter()
            .filter(|(_, r)| **r == resource)
            .map(|(key, _)| *key)
            .collect()
    }

    /// Number of live resources.
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

impl ResourceTable for ResourceRegistry {
    fn resource_info(&self, id: ResourceId) -> Option<ResourceInfo> {
        self.resources.get(&id).copied()
    }

    fn view_resource(&self, kind: ViewKind, id: ViewId) -> Option<ResourceId> {
        self.views.get(&(kind, id)).copied()
    }
}
