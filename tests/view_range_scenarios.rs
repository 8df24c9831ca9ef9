use d3d11_capture_common::{
    BoundView, DepthStencilView, DsvDesc, DsvDimension, DsvFlags, DxgiFormat, RangeExtractor,
    RenderTargetView, ResourceDimension, ResourceId, ResourceInfo, ResourceRange,
    ResourceRegistry, RtvDesc, RtvDimension, ShaderResourceView, SrvDesc, SrvDimension, UavDesc,
    UavDimension, UnorderedAccessView, ViewId, ViewKind,
};

const TEX: ResourceId = ResourceId::new(1);
const OTHER: ResourceId = ResourceId::new(2);

struct Fixture {
    reg: ResourceRegistry,
    next_view: u64,
}

impl Fixture {
    fn new(format: DxgiFormat) -> Self {
        let mut reg = ResourceRegistry::new();
        for id in [TEX, OTHER] {
            reg.insert_resource(
                id,
                ResourceInfo {
                    dimension: ResourceDimension::Texture2D,
                    format,
                },
            );
        }
        Self { reg, next_view: 1 }
    }

    fn view_id(&mut self, kind: ViewKind, resource: ResourceId) -> ViewId {
        let id = ViewId::new(self.next_view);
        self.next_view += 1;
        assert!(self.reg.insert_view(kind, id, resource));
        id
    }

    fn srv(
        &mut self,
        resource: ResourceId,
        format: DxgiFormat,
        dimension: SrvDimension,
    ) -> ShaderResourceView {
        ShaderResourceView {
            id: self.view_id(ViewKind::ShaderResource, resource),
            resource,
            desc: SrvDesc { format, dimension },
        }
    }

    fn uav(&mut self, resource: ResourceId, dimension: UavDimension) -> UnorderedAccessView {
        UnorderedAccessView {
            id: self.view_id(ViewKind::UnorderedAccess, resource),
            resource,
            desc: UavDesc {
                format: DxgiFormat::R8G8B8A8Unorm,
                dimension,
            },
        }
    }

    fn rtv(&mut self, resource: ResourceId, dimension: RtvDimension) -> RenderTargetView {
        RenderTargetView {
            id: self.view_id(ViewKind::RenderTarget, resource),
            resource,
            desc: RtvDesc {
                format: DxgiFormat::R8G8B8A8Unorm,
                dimension,
            },
        }
    }

    fn dsv(
        &mut self,
        resource: ResourceId,
        flags: DsvFlags,
        dimension: DsvDimension,
    ) -> DepthStencilView {
        DepthStencilView {
            id: self.view_id(ViewKind::DepthStencil, resource),
            resource,
            desc: DsvDesc {
                format: DxgiFormat::D24UnormS8Uint,
                flags,
                dimension,
            },
        }
    }

    fn range(&self, view: BoundView<'_>) -> ResourceRange {
        RangeExtractor::new(&self.reg).extract(view)
    }
}

#[test]
fn unbound_slots_of_every_kind_cover_everything() {
    let mut fx = Fixture::new(DxgiFormat::R8G8B8A8Typeless);
    let ex = RangeExtractor::new(&fx.reg);

    let nulls = [
        ex.extract(BoundView::None),
        ex.shader_resource(None),
        ex.unordered_access(None),
        ex.render_target(None),
        ex.depth_stencil(None),
    ];
    for r in nulls {
        assert_eq!(r, ResourceRange::NULL);
        assert!(r.is_full_range());
        assert!(!r.is_depth_read_only());
        assert!(!r.is_stencil_read_only());
    }

    let rtv = fx.rtv(TEX, RtvDimension::Texture2D { mip_slice: 3 });
    let bound = fx.range(BoundView::RenderTarget(&rtv));
    assert!(ResourceRange::NULL.intersects(&bound));
    assert!(bound.intersects(&ResourceRange::NULL));
    assert!(ResourceRange::NULL.intersects(&ResourceRange::subresource(TEX, 9, 9)));
}

#[test]
fn srv_texture2d_array_extents() {
    let mut fx = Fixture::new(DxgiFormat::R8G8B8A8Typeless);
    let srv = fx.srv(
        TEX,
        DxgiFormat::R8G8B8A8Unorm,
        SrvDimension::Texture2DArray {
            most_detailed_mip: 2,
            mip_levels: 3,
            first_array_slice: 4,
            array_size: 5,
        },
    );
    let r = fx.range(BoundView::ShaderResource(&srv));

    assert_eq!(r.resource(), Some(TEX));
    assert_eq!((r.min_mip(), r.max_mip()), (2, 4));
    assert_eq!((r.min_slice(), r.max_slice()), (4, 8));
    assert!(!r.is_full_range());
}

#[test]
fn srv_depth_stencil_plane_formats() {
    let mut fx = Fixture::new(DxgiFormat::R24G8Typeless);
    let tex2d = SrvDimension::Texture2D {
        most_detailed_mip: 0,
        mip_levels: u32::MAX,
    };

    let stencil = fx.srv(TEX, DxgiFormat::X24TypelessG8Uint, tex2d);
    let r = fx.range(BoundView::ShaderResource(&stencil));
    assert!(r.is_stencil_read_only());
    assert!(!r.is_depth_read_only());

    let depth = fx.srv(TEX, DxgiFormat::R24UnormX8Typeless, tex2d);
    let r = fx.range(BoundView::ShaderResource(&depth));
    assert!(r.is_depth_read_only());
    assert!(!r.is_stencil_read_only());
}

#[test]
fn dsv_read_only_flags_ignore_dimension() {
    let mut fx = Fixture::new(DxgiFormat::R24G8Typeless);
    let dims = [
        DsvDimension::Unknown,
        DsvDimension::Texture1D { mip_slice: 0 },
        DsvDimension::Texture1DArray {
            mip_slice: 1,
            first_array_slice: 0,
            array_size: 2,
        },
        DsvDimension::Texture2D { mip_slice: 2 },
        DsvDimension::Texture2DArray {
            mip_slice: 0,
            first_array_slice: 3,
            array_size: 1,
        },
        DsvDimension::Texture2DMs,
        DsvDimension::Texture2DMsArray {
            first_array_slice: 1,
            array_size: 4,
        },
    ];

    for dim in dims {
        let dsv = fx.dsv(TEX, DsvFlags::all(), dim);
        let r = fx.range(BoundView::DepthStencil(&dsv));
        assert!(r.is_depth_read_only(), "{dim:?}");
        assert!(r.is_stencil_read_only(), "{dim:?}");
    }
}

#[test]
fn srv_cube_array_spans_six_faces_per_cube() {
    let mut fx = Fixture::new(DxgiFormat::R8G8B8A8Typeless);
    let srv = fx.srv(
        TEX,
        DxgiFormat::R8G8B8A8Unorm,
        SrvDimension::TextureCubeArray {
            most_detailed_mip: 0,
            mip_levels: 1,
            first_2d_array_face: 6,
            num_cubes: 2,
        },
    );
    let r = fx.range(BoundView::ShaderResource(&srv));
    assert_eq!(r.min_slice(), 6);
    assert_eq!(r.max_slice(), 6 + 6 * 2 - 1);
}

#[test]
fn different_resources_never_overlap() {
    let mut fx = Fixture::new(DxgiFormat::R8G8B8A8Typeless);
    assert!(!ResourceRange::whole(TEX).intersects(&ResourceRange::whole(OTHER)));
    assert!(!ResourceRange::subresource(TEX, 0, 0)
        .intersects(&ResourceRange::subresource(OTHER, 0, 0)));

    let a = fx.uav(TEX, UavDimension::Texture2D { mip_slice: 0 });
    let b = fx.uav(OTHER, UavDimension::Texture2D { mip_slice: 0 });
    let ra = fx.range(BoundView::UnorderedAccess(&a));
    let rb = fx.range(BoundView::UnorderedAccess(&b));
    assert!(!ra.intersects(&rb));
    assert!(!ra.conflicts(&rb));
}

#[test]
fn whole_resource_matches_view_spanning_everything() {
    let mut fx = Fixture::new(DxgiFormat::R8G8B8A8Typeless);
    let srv = fx.srv(
        TEX,
        DxgiFormat::R8G8B8A8Unorm,
        SrvDimension::Texture2DArray {
            most_detailed_mip: 0,
            mip_levels: u32::MAX,
            first_array_slice: 0,
            array_size: u32::MAX,
        },
    );
    let from_view = fx.range(BoundView::ShaderResource(&srv));
    let whole = RangeExtractor::new(&fx.reg).whole(TEX);

    assert_eq!(from_view, whole);
    assert!(from_view.is_full_range());
    assert!(from_view.intersects(&whole));
    assert!(whole.intersects(&ResourceRange::NULL));
}

#[test]
fn explicit_extent_equal_to_resource_still_overlaps_whole() {
    // 4 mips x 6 slices, described explicitly rather than with "all".
    let mut fx = Fixture::new(DxgiFormat::R8G8B8A8Typeless);
    let srv = fx.srv(
        TEX,
        DxgiFormat::R8G8B8A8Unorm,
        SrvDimension::Texture2DArray {
            most_detailed_mip: 0,
            mip_levels: 4,
            first_array_slice: 0,
            array_size: 6,
        },
    );
    let explicit = fx.range(BoundView::ShaderResource(&srv));
    for mip in 0..4 {
        for slice in 0..6 {
            assert!(explicit.intersects(&ResourceRange::subresource(TEX, mip, slice)));
        }
    }
    assert!(explicit.intersects(&ResourceRange::whole(TEX)));
    assert!(ResourceRange::whole(TEX).intersects(&explicit));
}

#[test]
fn srv_and_uav_meet_at_mip_two_slice_zero() {
    let mut fx = Fixture::new(DxgiFormat::R8G8B8A8Typeless);
    let srv = fx.srv(
        TEX,
        DxgiFormat::R8G8B8A8Unorm,
        SrvDimension::Texture2DArray {
            most_detailed_mip: 1,
            mip_levels: 2,
            first_array_slice: 0,
            array_size: 1,
        },
    );
    let uav = fx.uav(
        TEX,
        UavDimension::Texture2DArray {
            mip_slice: 2,
            first_array_slice: 0,
            array_size: 6,
        },
    );

    let a = fx.range(BoundView::ShaderResource(&srv));
    let b = fx.range(BoundView::UnorderedAccess(&uav));
    assert!(a.intersects(&b));
    assert!(b.intersects(&a));
    assert!(a.conflicts(&b));

    let uav_mip3 = fx.uav(
        TEX,
        UavDimension::Texture2DArray {
            mip_slice: 3,
            first_array_slice: 0,
            array_size: 6,
        },
    );
    let c = fx.range(BoundView::UnorderedAccess(&uav_mip3));
    assert!(!a.intersects(&c));
}

#[test]
fn depth_srv_against_read_only_depth_target() {
    let mut fx = Fixture::new(DxgiFormat::R24G8Typeless);
    let tex2d = SrvDimension::Texture2D {
        most_detailed_mip: 0,
        mip_levels: 1,
    };
    let depth_srv = fx.srv(TEX, DxgiFormat::R24UnormX8Typeless, tex2d);
    let stencil_srv = fx.srv(TEX, DxgiFormat::X24TypelessG8Uint, tex2d);
    let writable = fx.dsv(TEX, DsvFlags::empty(), DsvDimension::Texture2D { mip_slice: 0 });
    let depth_ro = fx.dsv(
        TEX,
        DsvFlags::READ_ONLY_DEPTH,
        DsvDimension::Texture2D { mip_slice: 0 },
    );

    let depth_srv = fx.range(BoundView::ShaderResource(&depth_srv));
    let stencil_srv = fx.range(BoundView::ShaderResource(&stencil_srv));
    let writable = fx.range(BoundView::DepthStencil(&writable));
    let depth_ro = fx.range(BoundView::DepthStencil(&depth_ro));

    assert!(depth_srv.conflicts(&writable));
    assert!(stencil_srv.conflicts(&writable));
    assert!(!depth_srv.conflicts(&depth_ro));
    assert!(!depth_srv.conflicts(&stencil_srv));

    // Read-only depth leaves the stencil plane writable.
    assert!(stencil_srv.conflicts(&depth_ro));
    assert!(depth_ro.conflicts(&stencil_srv));

    let all_ro = fx.dsv(TEX, DsvFlags::all(), DsvDimension::Texture2D { mip_slice: 0 });
    let all_ro = fx.range(BoundView::DepthStencil(&all_ro));
    assert!(!stencil_srv.conflicts(&all_ro));
    assert!(!depth_srv.conflicts(&all_ro));
}

#[test]
fn unknown_dimensions_cover_the_whole_resource() {
    let mut fx = Fixture::new(DxgiFormat::R8G8B8A8Typeless);
    let whole = ResourceRange::whole(TEX);

    let srv = fx.srv(TEX, DxgiFormat::R8G8B8A8Unorm, SrvDimension::Unknown);
    let uav = fx.uav(TEX, UavDimension::Unknown);
    let rtv = fx.rtv(TEX, RtvDimension::Unknown);
    let dsv = fx.dsv(TEX, DsvFlags::empty(), DsvDimension::Unknown);

    let ranges = [
        fx.range(BoundView::ShaderResource(&srv)),
        fx.range(BoundView::UnorderedAccess(&uav)),
        fx.range(BoundView::RenderTarget(&rtv)),
        fx.range(BoundView::DepthStencil(&dsv)),
    ];
    for r in ranges {
        assert_eq!(r, whole);
        assert!(r.is_full_range());
        assert_eq!((r.min_mip(), r.max_mip()), (0, ResourceRange::ALL_MIPS));
        assert_eq!((r.min_slice(), r.max_slice()), (0, ResourceRange::ALL_SLICES));
        assert!(r.intersects(&ResourceRange::subresource(TEX, 11, 37)));
    }
}

#[test]
fn msaa_views_only_constrain_slices() {
    let mut fx = Fixture::new(DxgiFormat::R8G8B8A8Typeless);
    let rtv = fx.rtv(
        TEX,
        RtvDimension::Texture2DMsArray {
            first_array_slice: 2,
            array_size: 2,
        },
    );
    let r = fx.range(BoundView::RenderTarget(&rtv));
    assert_eq!((r.min_mip(), r.max_mip()), (0, ResourceRange::ALL_MIPS));
    assert_eq!((r.min_slice(), r.max_slice()), (2, 3));
    assert!(!r.is_full_range());

    let ms = fx.rtv(TEX, RtvDimension::Texture2DMs);
    assert!(fx.range(BoundView::RenderTarget(&ms)).is_full_range());
}

#[test]
fn buffer_views_cover_the_whole_buffer() {
    let mut fx = Fixture::new(DxgiFormat::Unknown);
    let rtv = fx.rtv(
        TEX,
        RtvDimension::Buffer {
            first_element: 16,
            num_elements: 4,
        },
    );
    assert_eq!(fx.range(BoundView::RenderTarget(&rtv)), ResourceRange::whole(TEX));
}
