//! Shared D3D11 helpers for the capture/replay layer.
//!
//! The centre of this crate is [`ResourceRange`]: given any of the four D3D11 view kinds it
//! computes which mips, array slices and depth/stencil aspects of the underlying resource the
//! view touches, so conflicting bindings (a render target that is also bound for reading, a
//! depth buffer sampled while it is being written) can be detected without looking at shaders.
//!
//! Around it sit the pieces the capture layer needs to feed it and to present captured state:
//! - [`format`]: DXGI formats and their typeless families.
//! - [`view`]: view descriptors, with the D3D11 dimension tag and union folded into one enum.
//! - [`codec`]: the flat word encoding of those descriptors.
//! - [`state`]: raw D3D11 pipeline-state enums translated to API-neutral values.
//! - [`marker`]: debug annotation regions.

pub mod codec;
mod error;
pub mod format;
pub mod marker;
pub mod range;
pub mod resource;
pub mod state;
pub mod view;

pub use error::{Result, ViewDescError};
pub use format::DxgiFormat;
pub use range::{Aspects, RangeExtractor, ResourceRange};
pub use resource::{
    ResourceDimension, ResourceId, ResourceInfo, ResourceRegistry, ResourceTable, ViewId,
    ViewKind,
};
pub use view::{
    BoundView, DepthStencilView, DsvDesc, DsvDimension, DsvFlags, RenderTargetView, RtvDesc,
    RtvDimension, ShaderResourceView, SrvDesc, SrvDimension, TextureDim, UavDesc, UavDimension,
    UnorderedAccessView,
};
