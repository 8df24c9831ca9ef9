//! Subresource ranges addressed by D3D11 views.
//!
//! A [`ResourceRange`] is the canonical answer to "which mips, which array slices and which
//! depth/stencil aspects of which resource does this view touch". Ranges from different view
//! kinds are directly comparable, which is what hazard tracking needs: a render target bound
//! over mip 2 of a texture conflicts with a shader-resource view reading mips `[1, 2]` of the
//! same texture, regardless of how either view encodes its dimension.

use bitflags::bitflags;
use tracing::{debug, trace};

use crate::format::DxgiFormat;
use crate::resource::{ResourceDimension, ResourceId, ResourceTable, ViewId, ViewKind};
use crate::view::{
    BoundView, DepthStencilView, DsvDimension, DsvFlags, RenderTargetView, RtvDimension,
    ShaderResourceView, SrvDimension, UavDimension, UnorderedAccessView, ViewExtent,
};

bitflags! {
    /// Planes of a combined depth/stencil resource that a range touches. Resources without
    /// separate planes count as touching both.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct Aspects: u8 {
        const DEPTH = 0x1;
        const STENCIL = 0x2;
    }
}

/// Mips, slices and read-only aspects of one resource.
///
/// Intervals are inclusive. [`ResourceRange::ALL_MIPS`] / [`ResourceRange::ALL_SLICES`] as a
/// maximum mean "up to the last mip/slice of the resource", whatever that is.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ResourceRange {
    resource: Option<ResourceId>,
    min_mip: u32,
    max_mip: u32,
    min_slice: u32,
    max_slice: u32,
    full_range: bool,
    aspects: Aspects,
    depth_read_only: bool,
    stencil_read_only: bool,
}

impl ResourceRange {
    pub const ALL_MIPS: u32 = u32::MAX;
    pub const ALL_SLICES: u32 = u32::MAX;

    /// The range of an unbound view slot: every subresource of an unidentified resource, with
    /// no aspect restriction. It intersects every other range.
    pub const NULL: Self = Self {
        resource: None,
        min_mip: 0,
        max_mip: Self::ALL_MIPS,
        min_slice: 0,
        max_slice: Self::ALL_SLICES,
        full_range: true,
        aspects: Aspects::all(),
        depth_read_only: false,
        stencil_read_only: false,
    };

    /// Every subresource of `resource`, e.g. a buffer or a texture used without a view.
    pub const fn whole(resource: ResourceId) -> Self {
        Self {
            resource: Some(resource),
            ..Self::NULL
        }
    }

    /// Exactly one subresource.
    pub const fn subresource(resource: ResourceId, mip: u32, slice: u32) -> Self {
        Self {
            resource: Some(resource),
            min_mip: mip,
            max_mip: mip,
            min_slice: slice,
            max_slice: slice,
            full_range: false,
            aspects: Aspects::all(),
            depth_read_only: false,
            stencil_read_only: false,
        }
    }

    /// Builds a range from raw D3D11 extents, normalising "all remaining" counts to the maximal
    /// sentinel.
    fn from_extent(resource: ResourceId, extent: ViewExtent) -> Self {
        let max_mip = inclusive_end(extent.min_mip, extent.mip_count, Self::ALL_MIPS);
        let max_slice = inclusive_end(extent.min_slice, extent.slice_count, Self::ALL_SLICES);

        Self {
            resource: Some(resource),
            min_mip: extent.min_mip,
            max_mip,
            min_slice: extent.min_slice,
            max_slice,
            full_range: extent.min_mip == 0
                && extent.min_slice == 0
                && max_mip == Self::ALL_MIPS
                && max_slice == Self::ALL_SLICES,
            aspects: Aspects::all(),
            depth_read_only: false,
            stencil_read_only: false,
        }
    }

    pub fn resource(&self) -> Option<ResourceId> {
        self.resource
    }

    pub fn is_null(&self) -> bool {
        self.resource.is_none()
    }

    pub fn min_mip(&self) -> u32 {
        self.min_mip
    }

    pub fn max_mip(&self) -> u32 {
        self.max_mip
    }

    pub fn min_slice(&self) -> u32 {
        self.min_slice
    }

    pub fn max_slice(&self) -> u32 {
        self.max_slice
    }

    pub fn is_full_range(&self) -> bool {
        self.full_range
    }

    /// Planes touched. A read-only flag only matters for a plane listed here.
    pub fn aspects(&self) -> Aspects {
        self.aspects
    }

    pub fn is_depth_read_only(&self) -> bool {
        self.depth_read_only
    }

    pub fn is_stencil_read_only(&self) -> bool {
        self.stencil_read_only
    }

    /// Whether the two ranges address at least one common subresource.
    pub fn intersects(&self, other: &ResourceRange) -> bool {
        match (self.resource, other.resource) {
            (Some(a), Some(b)) if a != b => return false,
            (None, _) | (_, None) => return true,
            _ => {}
        }

        if self.full_range || other.full_range {
            return true;
        }

        self.min_mip <= other.max_mip
            && other.min_mip <= self.max_mip
            && self.min_slice <= other.max_slice
            && other.min_slice <= self.max_slice
    }

    /// Whether using both ranges at once is a hazard.
    ///
    /// This is [`intersects`](Self::intersects) narrowed by aspect: the ranges conflict only if
    /// some plane touched by both is not read-only on both sides. A plane without a read-only
    /// flag counts as written.
    pub fn conflicts(&self, other: &ResourceRange) -> bool {
        if !self.intersects(other) {
            return false;
        }

        let shared = self.aspects & other.aspects;
        let depth = shared.contains(Aspects::DEPTH)
            && !(self.depth_read_only && other.depth_read_only);
        let stencil = shared.contains(Aspects::STENCIL)
            && !(self.stencil_read_only && other.stencil_read_only);
        depth || stencil
    }
}

impl Default for ResourceRange {
    fn default() -> Self {
        Self::NULL
    }
}

/// Inclusive end of `count` items starting at `first`.
///
/// `all` is both the "to the end" count and the resulting sentinel. A zero count (never valid in
/// D3D11) is treated as one item so the interval stays non-empty.
fn inclusive_end(first: u32, count: u32, all: u32) -> u32 {
    if count == all {
        return all;
    }
    first.saturating_add(count.max(1) - 1)
}

/// Computes [`ResourceRange`]s for views tracked by a [`ResourceTable`].
///
/// The table is consulted for the resource's own format when a shader-resource view does not
/// declare one, and (in debug builds, or with the `devel-asserts` feature) to check that every
/// view and resource handed in is one the table actually tracks, with a view naming the resource
/// it was created over. Mixing tracked and untracked
/// handles would let two overlapping ranges compare as disjoint.
#[derive(Debug)]
pub struct RangeExtractor<'a, T: ?Sized> {
    table: &'a T,
}

impl<'a, T: ResourceTable + ?Sized> RangeExtractor<'a, T> {
    pub fn new(table: &'a T) -> Self {
        Self { table }
    }

    pub fn extract(&self, view: BoundView<'_>) -> ResourceRange {
        match view {
            BoundView::None => ResourceRange::NULL,
            BoundView::ShaderResource(srv) => self.shader_resource_range(srv),
            BoundView::UnorderedAccess(uav) => self.unordered_access_range(uav),
            BoundView::RenderTarget(rtv) => self.render_target_range(rtv),
            BoundView::DepthStencil(dsv) => self.depth_stencil_range(dsv),
        }
    }

    pub fn shader_resource(&self, view: Option<&ShaderResourceView>) -> ResourceRange {
        self.extract(view.into())
    }

    pub fn unordered_access(&self, view: Option<&UnorderedAccessView>) -> ResourceRange {
        self.extract(view.into())
    }

    pub fn render_target(&self, view: Option<&RenderTargetView>) -> ResourceRange {
        self.extract(view.into())
    }

    pub fn depth_stencil(&self, view: Option<&DepthStencilView>) -> ResourceRange {
        self.extract(view.into())
    }

    /// See [`ResourceRange::whole`].
    pub fn whole(&self, resource: ResourceId) -> ResourceRange {
        self.check_resource(resource);
        ResourceRange::whole(resource)
    }

    /// See [`ResourceRange::subresource`].
    pub fn subresource(&self, resource: ResourceId, mip: u32, slice: u32) -> ResourceRange {
        self.check_resource(resource);
        ResourceRange::subresource(resource, mip, slice)
    }

    fn shader_resource_range(&self, srv: &ShaderResourceView) -> ResourceRange {
        self.check_view(ViewKind::ShaderResource, srv.id, srv.resource);

        let dimension = srv.desc.dimension;
        if dimension == SrvDimension::Unknown {
            debug!(view = %srv.id, "SRV has unknown dimension; treating it as the whole resource");
        }

        let mut range = ResourceRange::from_extent(srv.resource, dimension.extent());

        let format = self.effective_srv_format(srv);
        if format.is_stencil_plane_view() {
            range.aspects = Aspects::STENCIL;
            range.stencil_read_only = true;
        } else if format.is_depth_plane_view() {
            range.aspects = Aspects::DEPTH;
            range.depth_read_only = true;
        } else if format.is_depth_alias_candidate() {
            // Any view that could be reading a depth-only format is treated as reading depth.
            // This only matters for conflicts against a bound depth target.
            range.aspects = Aspects::DEPTH;
            range.depth_read_only = true;
        }

        range
    }

    /// The SRV's own format, or for 1D/2D textures the resource's format when the view leaves
    /// it unspecified.
    // TODO: check whether 3D textures and buffers can reach here with an unknown view format;
    // they currently get no aspect classification.
    fn effective_srv_format(&self, srv: &ShaderResourceView) -> DxgiFormat {
        if srv.desc.format != DxgiFormat::Unknown {
            return srv.desc.format;
        }

        match self.table.resource_info(srv.resource) {
            Some(info)
                if matches!(
                    info.dimension,
                    ResourceDimension::Texture1D | ResourceDimension::Texture2D
                ) =>
            {
                trace!(
                    view = %srv.id,
                    resource = %srv.resource,
                    format = ?info.format,
                    "SRV format unknown; using resource format"
                );
                info.format
            }
            _ => DxgiFormat::Unknown,
        }
    }

    fn unordered_access_range(&self, uav: &UnorderedAccessView) -> ResourceRange {
        self.check_view(ViewKind::UnorderedAccess, uav.id, uav.resource);

        let dimension = uav.desc.dimension;
        if dimension == UavDimension::Unknown {
            debug!(view = %uav.id, "UAV has unknown dimension; treating it as the whole resource");
        }
        ResourceRange::from_extent(uav.resource, dimension.extent())
    }

    fn render_target_range(&self, rtv: &RenderTargetView) -> ResourceRange {
        self.check_view(ViewKind::RenderTarget, rtv.id, rtv.resource);

        let dimension = rtv.desc.dimension;
        if dimension == RtvDimension::Unknown {
            debug!(view = %rtv.id, "RTV has unknown dimension; treating it as the whole resource");
        }
        ResourceRange::from_extent(rtv.resource, dimension.extent())
    }

    fn depth_stencil_range(&self, dsv: &DepthStencilView) -> ResourceRange {
        self.check_view(ViewKind::DepthStencil, dsv.id, dsv.resource);

        let dimension = dsv.desc.dimension;
        if dimension == DsvDimension::Unknown {
            debug!(view = %dsv.id, "DSV has unknown dimension; treating it as the whole resource");
        }

        let mut range = ResourceRange::from_extent(dsv.resource, dimension.extent());
        range.depth_read_only = dsv.desc.flags.contains(DsvFlags::READ_ONLY_DEPTH);
        range.stencil_read_only = dsv.desc.flags.contains(DsvFlags::READ_ONLY_STENCIL);
        range
    }

    #[cfg(any(debug_assertions, feature = "devel-asserts"))]
    fn check_view(&self, kind: ViewKind, id: ViewId, resource: ResourceId) {
        match self.table.view_resource(kind, id) {
            None => panic!("{kind} {id} is not tracked by the resource table"),
            Some(owner) => assert_eq!(
                owner, resource,
                "{kind} {id} was created over {owner}, not {resource}"
            ),
        }
    }

    #[cfg(not(any(debug_assertions, feature = "devel-asserts")))]
    fn check_view(&self, _kind: ViewKind, _id: ViewId, _resource: ResourceId) {}

    #[cfg(any(debug_assertions, feature = "devel-asserts"))]
    fn check_resource(&self, id: ResourceId) {
        assert!(
            self.table.owns_resource(id),
            "{id} is not tracked by the resource table"
        );
    }

    #[cfg(not(any(debug_assertions, feature = "devel-asserts")))]
    fn check_resource(&self, _id: ResourceId) {}
}
