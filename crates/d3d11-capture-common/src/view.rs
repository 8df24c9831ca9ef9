//! D3D11 view descriptors.
//!
//! The dimension enums fold the D3D11 `ViewDimension` tag and the matching union member into one
//! value, so a descriptor can never carry a payload that disagrees with its tag. Field names
//! follow the D3D11 descriptor members.

use bitflags::bitflags;

use crate::format::DxgiFormat;
use crate::range::ResourceRange;
use crate::resource::{ResourceId, ViewId};

/// API-neutral texture dimension, as shown to tools inspecting a capture.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TextureDim {
    Unknown,
    Buffer,
    Texture1D,
    Texture1DArray,
    Texture2D,
    Texture2DArray,
    Texture2DMs,
    Texture2DMsArray,
    Texture3D,
    TextureCube,
    TextureCubeArray,
}

/// Raw mip/slice extent gathered from a view payload.
///
/// Counts are in D3D11 terms: [`ResourceRange::ALL_MIPS`]/[`ResourceRange::ALL_SLICES`] (the
/// D3D11 `-1`) mean "to the end of the resource", and an axis the dimension does not constrain
/// is left at that value.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ViewExtent {
    pub min_mip: u32,
    pub mip_count: u32,
    pub min_slice: u32,
    pub slice_count: u32,
}

impl ViewExtent {
    pub const MAXIMAL: Self = Self {
        min_mip: 0,
        mip_count: ResourceRange::ALL_MIPS,
        min_slice: 0,
        slice_count: ResourceRange::ALL_SLICES,
    };

    fn mips(most_detailed_mip: u32, mip_levels: u32) -> Self {
        Self {
            min_mip: most_detailed_mip,
            mip_count: mip_levels,
            ..Self::MAXIMAL
        }
    }

    /// A single bound mip (UAV/RTV/DSV style).
    fn mip_slice(mip_slice: u32) -> Self {
        Self::mips(mip_slice, 1)
    }

    fn slices(self, first: u32, count: u32) -> Self {
        Self {
            min_slice: first,
            slice_count: count,
            ..self
        }
    }
}

bitflags! {
    /// `D3D11_BUFFEREX_SRV_FLAG`.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
    pub struct BufferExSrvFlags: u32 {
        const RAW = 0x1;
    }
}

bitflags! {
    /// `D3D11_BUFFER_UAV_FLAG`.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
    pub struct UavBufferFlags: u32 {
        const RAW = 0x1;
        const APPEND = 0x2;
        const COUNTER = 0x4;
    }
}

bitflags! {
    /// `D3D11_DSV_FLAG`.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
    pub struct DsvFlags: u32 {
        const READ_ONLY_DEPTH = 0x1;
        const READ_ONLY_STENCIL = 0x2;
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SrvDimension {
    Unknown,
    Buffer {
        first_element: u32,
        num_elements: u32,
    },
    BufferEx {
        first_element: u32,
        num_elements: u32,
        flags: BufferExSrvFlags,
    },
    Texture1D {
        most_detailed_mip: u32,
        mip_levels: u32,
    },
    Texture1DArray {
        most_detailed_mip: u32,
        mip_levels: u32,
        first_array_slice: u32,
        array_size: u32,
    },
    Texture2D {
        most_detailed_mip: u32,
        mip_levels: u32,
    },
    Texture2DArray {
        most_detailed_mip: u32,
        mip_levels: u32,
        first_array_slice: u32,
        array_size: u32,
    },
    Texture2DMs,
    Texture2DMsArray {
        first_array_slice: u32,
        array_size: u32,
    },
    Texture3D {
        most_detailed_mip: u32,
        mip_levels: u32,
    },
    TextureCube {
        most_detailed_mip: u32,
        mip_levels: u32,
    },
    TextureCubeArray {
        most_detailed_mip: u32,
        mip_levels: u32,
        first_2d_array_face: u32,
        num_cubes: u32,
    },
}

impl SrvDimension {
    /// `D3D11_SRV_DIMENSION` value.
    pub fn tag(&self) -> u32 {
        match self {
            SrvDimension::Unknown => 0,
            SrvDimension::Buffer { .. } => 1,
            SrvDimension::Texture1D { .. } => 2,
            SrvDimension::Texture1DArray { .. } => 3,
            SrvDimension::Texture2D { .. } => 4,
            SrvDimension::Texture2DArray { .. } => 5,
            SrvDimension::Texture2DMs => 6,
            SrvDimension::Texture2DMsArray { .. } => 7,
            SrvDimension::Texture3D { .. } => 8,
            SrvDimension::TextureCube { .. } => 9,
            SrvDimension::TextureCubeArray { .. } => 10,
            SrvDimension::BufferEx { .. } => 11,
        }
    }

    pub fn texture_dim(&self) -> TextureDim {
        match self {
            SrvDimension::Unknown => TextureDim::Unknown,
            SrvDimension::Buffer { .. } | SrvDimension::BufferEx { .. } => TextureDim::Buffer,
            SrvDimension::Texture1D { .. } => TextureDim::Texture1D,
            SrvDimension::Texture1DArray { .. } => TextureDim::Texture1DArray,
            SrvDimension::Texture2D { .. } => TextureDim::Texture2D,
            SrvDimension::Texture2DArray { .. } => TextureDim::Texture2DArray,
            SrvDimension::Texture2DMs => TextureDim::Texture2DMs,
            SrvDimension::Texture2DMsArray { .. } => TextureDim::Texture2DMsArray,
            SrvDimension::Texture3D { .. } => TextureDim::Texture3D,
            SrvDimension::TextureCube { .. } => TextureDim::TextureCube,
            SrvDimension::TextureCubeArray { .. } => TextureDim::TextureCubeArray,
        }
    }

    pub fn extent(&self) -> ViewExtent {
        match *self {
            SrvDimension::Texture1D {
                most_detailed_mip,
                mip_levels,
            }
            | SrvDimension::Texture2D {
                most_detailed_mip,
                mip_levels,
            }
            | SrvDimension::Texture3D {
                most_detailed_mip,
                mip_levels,
            }
            | SrvDimension::TextureCube {
                most_detailed_mip,
                mip_levels,
            } => ViewExtent::mips(most_detailed_mip, mip_levels),
            SrvDimension::Texture1DArray {
                most_detailed_mip,
                mip_levels,
                first_array_slice,
                array_size,
            }
            | SrvDimension::Texture2DArray {
                most_detailed_mip,
                mip_levels,
                first_array_slice,
                array_size,
            } => ViewExtent::mips(most_detailed_mip, mip_levels)
                .slices(first_array_slice, array_size),
            SrvDimension::Texture2DMs => ViewExtent::MAXIMAL,
            SrvDimension::Texture2DMsArray {
                first_array_slice,
                array_size,
            } => ViewExtent::MAXIMAL.slices(first_array_slice, array_size),
            SrvDimension::TextureCubeArray {
                most_detailed_mip,
                mip_levels,
                first_2d_array_face,
                num_cubes,
            } => ViewExtent::mips(most_detailed_mip, mip_levels)
                .slices(first_2d_array_face, num_cubes.saturating_mul(6)),
            SrvDimension::Unknown | SrvDimension::Buffer { .. } | SrvDimension::BufferEx { .. } => {
                ViewExtent::MAXIMAL
            }
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UavDimension {
    Unknown,
    Buffer {
        first_element: u32,
        num_elements: u32,
        flags: UavBufferFlags,
    },
    Texture1D {
        mip_slice: u32,
    },
    Texture1DArray {
        mip_slice: u32,
        first_array_slice: u32,
        array_size: u32,
    },
    Texture2D {
        mip_slice: u32,
    },
    Texture2DArray {
        mip_slice: u32,
        first_array_slice: u32,
        array_size: u32,
    },
    Texture3D {
        mip_slice: u32,
        first_w_slice: u32,
        w_size: u32,
    },
}

impl UavDimension {
    /// `D3D11_UAV_DIMENSION` value.
    pub fn tag(&self) -> u32 {
        match self {
            UavDimension::Unknown => 0,
            UavDimension::Buffer { .. } => 1,
            UavDimension::Texture1D { .. } => 2,
            UavDimension::Texture1DArray { .. } => 3,
            UavDimension::Texture2D { .. } => 4,
            UavDimension::Texture2DArray { .. } => 5,
            UavDimension::Texture3D { .. } => 8,
        }
    }

    pub fn texture_dim(&self) -> TextureDim {
        match self {
            UavDimension::Unknown => TextureDim::Unknown,
            UavDimension::Buffer { .. } => TextureDim::Buffer,
            UavDimension::Texture1D { .. } => TextureDim::Texture1D,
            UavDimension::Texture1DArray { .. } => TextureDim::Texture1DArray,
            UavDimension::Texture2D { .. } => TextureDim::Texture2D,
            UavDimension::Texture2DArray { .. } => TextureDim::Texture2DArray,
            UavDimension::Texture3D { .. } => TextureDim::Texture3D,
        }
    }

    pub fn extent(&self) -> ViewExtent {
        match *self {
            UavDimension::Texture1D { mip_slice } | UavDimension::Texture2D { mip_slice } => {
                ViewExtent::mip_slice(mip_slice)
            }
            UavDimension::Texture1DArray {
                mip_slice,
                first_array_slice,
                array_size,
            }
            | UavDimension::Texture2DArray {
                mip_slice,
                first_array_slice,
                array_size,
            } => ViewExtent::mip_slice(mip_slice).slices(first_array_slice, array_size),
            UavDimension::Texture3D {
                mip_slice,
                first_w_slice,
                w_size,
            } => ViewExtent::mip_slice(mip_slice).slices(first_w_slice, w_size),
            UavDimension::Unknown | UavDimension::Buffer { .. } => ViewExtent::MAXIMAL,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RtvDimension {
    Unknown,
    Buffer {
        first_element: u32,
        num_elements: u32,
    },
    Texture1D {
        mip_slice: u32,
    },
    Texture1DArray {
        mip_slice: u32,
        first_array_slice: u32,
        array_size: u32,
    },
    Texture2D {
        mip_slice: u32,
    },
    Texture2DArray {
        mip_slice: u32,
        first_array_slice: u32,
        array_size: u32,
    },
    Texture2DMs,
    Texture2DMsArray {
        first_array_slice: u32,
        array_size: u32,
    },
    Texture3D {
        mip_slice: u32,
        first_w_slice: u32,
        w_size: u32,
    },
}

impl RtvDimension {
    /// `D3D11_RTV_DIMENSION` value.
    pub fn tag(&self) -> u32 {
        match self {
            RtvDimension::Unknown => 0,
            RtvDimension::Buffer { .. } => 1,
            RtvDimension::Texture1D { .. } => 2,
            RtvDimension::Texture1DArray { .. } => 3,
            RtvDimension::Texture2D { .. } => 4,
            RtvDimension::Texture2DArray { .. } => 5,
            RtvDimension::Texture2DMs => 6,
            RtvDimension::Texture2DMsArray { .. } => 7,
            RtvDimension::Texture3D { .. } => 8,
        }
    }

    pub fn texture_dim(&self) -> TextureDim {
        match self {
            RtvDimension::Unknown => TextureDim::Unknown,
            RtvDimension::Buffer { .. } => TextureDim::Buffer,
            RtvDimension::Texture1D { .. } => TextureDim::Texture1D,
            RtvDimension::Texture1DArray { .. } => TextureDim::Texture1DArray,
            RtvDimension::Texture2D { .. } => TextureDim::Texture2D,
            RtvDimension::Texture2DArray { .. } => TextureDim::Texture2DArray,
            RtvDimension::Texture2DMs => TextureDim::Texture2DMs,
            RtvDimension::Texture2DMsArray { .. } => TextureDim::Texture2DMsArray,
            RtvDimension::Texture3D { .. } => TextureDim::Texture3D,
        }
    }

    pub fn extent(&self) -> ViewExtent {
        match *self {
            RtvDimension::Texture1D { mip_slice } | RtvDimension::Texture2D { mip_slice } => {
                ViewExtent::mip_slice(mip_slice)
            }
            RtvDimension::Texture1DArray {
                mip_slice,
                first_array_slice,
                array_size,
            }
            | RtvDimension::Texture2DArray {
                mip_slice,
                first_array_slice,
                array_size,
            } => ViewExtent::mip_slice(mip_slice).slices(first_array_slice, array_size),
            RtvDimension::Texture2DMs => ViewExtent::MAXIMAL,
            RtvDimension::Texture2DMsArray {
                first_array_slice,
                array_size,
            } => ViewExtent::MAXIMAL.slices(first_array_slice, array_size),
            RtvDimension::Texture3D {
                mip_slice,
                first_w_slice,
                w_size,
            } => ViewExtent::mip_slice(mip_slice).slices(first_w_slice, w_size),
            RtvDimension::Unknown | RtvDimension::Buffer { .. } => ViewExtent::MAXIMAL,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DsvDimension {
    Unknown,
    Texture1D {
        mip_slice: u32,
    },
    Texture1DArray {
        mip_slice: u32,
        first_array_slice: u32,
        array_size: u32,
    },
    Texture2D {
        mip_slice: u32,
    },
    Texture2DArray {
        mip_slice: u32,
        first_array_slice: u32,
        array_size: u32,
    },
    Texture2DMs,
    Texture2DMsArray {
        first_array_slice: u32,
        array_size: u32,
    },
}

impl DsvDimension {
    /// `D3D11_DSV_DIMENSION` value.
    pub fn tag(&self) -> u32 {
        match self {
            DsvDimension::Unknown => 0,
            DsvDimension::Texture1D { .. } => 1,
            DsvDimension::Texture1DArray { .. } => 2,
            DsvDimension::Texture2D { .. } => 3,
            DsvDimension::Texture2DArray { .. } => 4,
            DsvDimension::Texture2DMs => 5,
            DsvDimension::Texture2DMsArray { .. } => 6,
        }
    }

    pub fn texture_dim(&self) -> TextureDim {
        match self {
            DsvDimension::Unknown => TextureDim::Unknown,
            DsvDimension::Texture1D { .. } => TextureDim::Texture1D,
            DsvDimension::Texture1DArray { .. } => TextureDim::Texture1DArray,
            DsvDimension::Texture2D { .. } => TextureDim::Texture2D,
            DsvDimension::Texture2DArray { .. } => TextureDim::Texture2DArray,
            DsvDimension::Texture2DMs => TextureDim::Texture2DMs,
            DsvDimension::Texture2DMsArray { .. } => TextureDim::Texture2DMsArray,
        }
    }

    pub fn extent(&self) -> ViewExtent {
        match *self {
            DsvDimension::Texture1D { mip_slice } | DsvDimension::Texture2D { mip_slice } => {
                ViewExtent::mip_slice(mip_slice)
            }
            DsvDimension::Texture1DArray {
                mip_slice,
                first_array_slice,
                array_size,
            }
            | DsvDimension::Texture2DArray {
                mip_slice,
                first_array_slice,
                array_size,
            } => ViewExtent::mip_slice(mip_slice).slices(first_array_slice, array_size),
            DsvDimension::Texture2DMs => ViewExtent::MAXIMAL,
            DsvDimension::Texture2DMsArray {
                first_array_slice,
                array_size,
            } => ViewExtent::MAXIMAL.slices(first_array_slice, array_size),
            DsvDimension::Unknown => ViewExtent::MAXIMAL,
        }
    }
}

/// `D3D11_SHADER_RESOURCE_VIEW_DESC`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SrvDesc {
    /// [`DxgiFormat::Unknown`] defers to the resource's own format.
    pub format: DxgiFormat,
    pub dimension: SrvDimension,
}

/// `D3D11_UNORDERED_ACCESS_VIEW_DESC`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct UavDesc {
    pub format: DxgiFormat,
    pub dimension: UavDimension,
}

/// `D3D11_RENDER_TARGET_VIEW_DESC`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct RtvDesc {
    pub format: DxgiFormat,
    pub dimension: RtvDimension,
}

/// `D3D11_DEPTH_STENCIL_VIEW_DESC`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct DsvDesc {
    pub format: DxgiFormat,
    pub flags: DsvFlags,
    pub dimension: DsvDimension,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ShaderResourceView {
    pub id: ViewId,
    pub resource: ResourceId,
    pub desc: SrvDesc,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct UnorderedAccessView {
    pub id: ViewId,
    pub resource: ResourceId,
    pub desc: UavDesc,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RenderTargetView {
    pub id: ViewId,
    pub resource: ResourceId,
    pub desc: RtvDesc,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DepthStencilView {
    pub id: ViewId,
    pub resource: ResourceId,
    pub desc: DsvDesc,
}

/// Whatever is bound in a view slot, including an empty slot.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BoundView<'a> {
    None,
    ShaderResource(&'a ShaderResourceView),
    UnorderedAccess(&'a UnorderedAccessView),
    RenderTarget(&'a RenderTargetView),
    DepthStencil(&'a DepthStencilView),
}

impl<'a> From<Option<&'a ShaderResourceView>> for BoundView<'a> {
    fn from(view: Option<&'a ShaderResourceView>) -> Self {
        view.map_or(BoundView::None, BoundView::ShaderResource)
    }
}

impl<'a> From<Option<&'a UnorderedAccessView>> for BoundView<'a> {
    fn from(view: Option<&'a UnorderedAccessView>) -> Self {
        view.map_or(BoundView::None, BoundView::UnorderedAccess)
    }
}

impl<'a> From<Option<&'a RenderTargetView>> for BoundView<'a> {
    fn from(view: Option<&'a RenderTargetView>) -> Self {
        view.map_or(BoundView::None, BoundView::RenderTarget)
    }
}

impl<'a> From<Option<&'a DepthStencilView>> for BoundView<'a> {
    fn from(view: Option<&'a DepthStencilView>) -> Self {
        view.map_or(BoundView::None, BoundView::DepthStencil)
    }
}
