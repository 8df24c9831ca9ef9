//! DXGI pixel/data formats.
//!
//! Discriminants are the raw `DXGI_FORMAT` values so descriptors decoded from a captured word
//! stream can be converted with [`DxgiFormat::from_word`] without a lookup table.

macro_rules! dxgi_formats {
    ($($name:ident = $value:literal,)+) => {
        #[repr(u32)]
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
        pub enum DxgiFormat {
            $($name = $value,)+
        }

        impl DxgiFormat {
            /// Decodes a raw `DXGI_FORMAT`. Values this crate does not know map to
            /// [`DxgiFormat::Unknown`].
            pub fn from_word(word: u32) -> Self {
                match word {
                    $($value => Self::$name,)+
                    _ => Self::Unknown,
                }
            }
        }
    };
}

dxgi_formats! {
    Unknown = 0,
    R32G32B32A32Typeless = 1,
    R32G32B32A32Float = 2,
    R32G32B32A32Uint = 3,
    R32G32B32A32Sint = 4,
    R32G32B32Typeless = 5,
    R32G32B32Float = 6,
    R32G32B32Uint = 7,
    R32G32B32Sint = 8,
    R16G16B16A16Typeless = 9,
    R16G16B16A16Float = 10,
    R16G16B16A16Unorm = 11,
    R16G16B16A16Uint = 12,
    R16G16B16A16Snorm = 13,
    R16G16B16A16Sint = 14,
    R32G32Typeless = 15,
    R32G32Float = 16,
    R32G32Uint = 17,
    R32G32Sint = 18,
    R32G8X24Typeless = 19,
    D32FloatS8X24Uint = 20,
    R32FloatX8X24Typeless = 21,
    X32TypelessG8X24Uint = 22,
    R10G10B10A2Typeless = 23,
    R10G10B10A2Unorm = 24,
    R10G10B10A2Uint = 25,
    R11G11B10Float = 26,
    R8G8B8A8Typeless = 27,
    R8G8B8A8Unorm = 28,
    R8G8B8A8UnormSrgb = 29,
    R8G8B8A8Uint = 30,
    R8G8B8A8Snorm = 31,
    R8G8B8A8Sint = 32,
    R16G16Typeless = 33,
    R16G16Float = 34,
    R16G16Unorm = 35,
    R16G16Uint = 36,
    R16G16Snorm = 37,
    R16G16Sint = 38,
    R32Typeless = 39,
    D32Float = 40,
    R32Float = 41,
    R32Uint = 42,
    R32Sint = 43,
    R24G8Typeless = 44,
    D24UnormS8Uint = 45,
    R24UnormX8Typeless = 46,
    X24TypelessG8Uint = 47,
    R8G8Typeless = 48,
    R8G8Unorm = 49,
    R8G8Uint = 50,
    R8G8Snorm = 51,
    R8G8Sint = 52,
    R16Typeless = 53,
    R16Float = 54,
    D16Unorm = 55,
    R16Unorm = 56,
    R16Uint = 57,
    R16Snorm = 58,
    R16Sint = 59,
    R8Typeless = 60,
    R8Unorm = 61,
    R8Uint = 62,
    R8Snorm = 63,
    R8Sint = 64,
    A8Unorm = 65,
    R1Unorm = 66,
    R9G9B9E5SharedExp = 67,
    R8G8B8G8Unorm = 68,
    G8R8G8B8Unorm = 69,
    Bc1Typeless = 70,
    Bc1Unorm = 71,
    Bc1UnormSrgb = 72,
    Bc2Typeless = 73,
    Bc2Unorm = 74,
    Bc2UnormSrgb = 75,
    Bc3Typeless = 76,
    Bc3Unorm = 77,
    Bc3UnormSrgb = 78,
    Bc4Typeless = 79,
    Bc4Unorm = 80,
    Bc4Snorm = 81,
    Bc5Typeless = 82,
    Bc5Unorm = 83,
    Bc5Snorm = 84,
    B5G6R5Unorm = 85,
    B5G5R5A1Unorm = 86,
    B8G8R8A8Unorm = 87,
    B8G8R8X8Unorm = 88,
    R10G10B10XrBiasA2Unorm = 89,
    B8G8R8A8Typeless = 90,
    B8G8R8A8UnormSrgb = 91,
    B8G8R8X8Typeless = 92,
    B8G8R8X8UnormSrgb = 93,
    Bc6hTypeless = 94,
    Bc6hUf16 = 95,
    Bc6hSf16 = 96,
    Bc7Typeless = 97,
    Bc7Unorm = 98,
    Bc7UnormSrgb = 99,
    Ayuv = 100,
    Y410 = 101,
    Y416 = 102,
    Nv12 = 103,
    P010 = 104,
    P016 = 105,
    Opaque420 = 106,
    Yuy2 = 107,
    Y210 = 108,
    Y216 = 109,
    Nv11 = 110,
    Ai44 = 111,
    Ia44 = 112,
    P8 = 113,
    A8P8 = 114,
    B4G4R4A4Unorm = 115,
    P208 = 130,
    V208 = 131,
    V408 = 132,
}

impl DxgiFormat {
    /// Returns the typeless family this format belongs to.
    ///
    /// Formats that are already typeless, and formats without a typeless family (packed,
    /// shared-exponent and video formats), are returned unchanged.
    pub fn typeless(self) -> Self {
        use DxgiFormat::*;

        match self {
            R32G32B32A32Float | R32G32B32A32Uint | R32G32B32A32Sint => R32G32B32A32Typeless,
            R32G32B32Float | R32G32B32Uint | R32G32B32Sint => R32G32B32Typeless,
            R16G16B16A16Float | R16G16B16A16Unorm | R16G16B16A16Uint | R16G16B16A16Snorm
            | R16G16B16A16Sint => R16G16B16A16Typeless,
            R32G32Float | R32G32Uint | R32G32Sint => R32G32Typeless,
            D32FloatS8X24Uint | R32FloatX8X24Typeless | X32TypelessG8X24Uint => R32G8X24Typeless,
            R10G10B10A2Unorm | R10G10B10A2Uint | R10G10B10XrBiasA2Unorm => R10G10B10A2Typeless,
            R8G8B8A8Unorm | R8G8B8A8UnormSrgb | R8G8B8A8Uint | R8G8B8A8Snorm | R8G8B8A8Sint => {
                R8G8B8A8Typeless
            }
            R16G16Float | R16G16Unorm | R16G16Uint | R16G16Snorm | R16G16Sint => R16G16Typeless,
            D32Float | R32Float | R32Uint | R32Sint => R32Typeless,
            D24UnormS8Uint | R24UnormX8Typeless | X24TypelessG8Uint => R24G8Typeless,
            R8G8Unorm | R8G8Uint | R8G8Snorm | R8G8Sint => R8G8Typeless,
            R16Float | D16Unorm | R16Unorm | R16Uint | R16Snorm | R16Sint => R16Typeless,
            R8Unorm | R8Uint | R8Snorm | R8Sint => R8Typeless,
            Bc1Unorm | Bc1UnormSrgb => Bc1Typeless,
            Bc2Unorm | Bc2UnormSrgb => Bc2Typeless,
            Bc3Unorm | Bc3UnormSrgb => Bc3Typeless,
            Bc4Unorm | Bc4Snorm => Bc4Typeless,
            Bc5Unorm | Bc5Snorm => Bc5Typeless,
            B8G8R8A8Unorm | B8G8R8A8UnormSrgb => B8G8R8A8Typeless,
            B8G8R8X8Unorm | B8G8R8X8UnormSrgb => B8G8R8X8Typeless,
            Bc6hUf16 | Bc6hSf16 => Bc6hTypeless,
            Bc7Unorm | Bc7UnormSrgb => Bc7Typeless,
            other => other,
        }
    }

    pub fn is_typeless(self) -> bool {
        use DxgiFormat::*;

        matches!(
            self,
            R32G32B32A32Typeless
                | R32G32B32Typeless
                | R16G16B16A16Typeless
                | R32G32Typeless
                | R32G8X24Typeless
                | R10G10B10A2Typeless
                | R8G8B8A8Typeless
                | R16G16Typeless
                | R32Typeless
                | R24G8Typeless
                | R8G8Typeless
                | R16Typeless
                | R8Typeless
                | Bc1Typeless
                | Bc2Typeless
                | Bc3Typeless
                | Bc4Typeless
                | Bc5Typeless
                | B8G8R8A8Typeless
                | B8G8R8X8Typeless
                | Bc6hTypeless
                | Bc7Typeless
        )
    }

    /// View formats that read only the depth plane of a combined depth/stencil resource.
    pub fn is_depth_plane_view(self) -> bool {
        matches!(
            self,
            DxgiFormat::R32FloatX8X24Typeless | DxgiFormat::R24UnormX8Typeless
        )
    }

    /// View formats that read only the stencil plane of a combined depth/stencil resource.
    pub fn is_stencil_plane_view(self) -> bool {
        matches!(
            self,
            DxgiFormat::X32TypelessG8X24Uint | DxgiFormat::X24TypelessG8Uint
        )
    }

    /// Single-channel formats whose typeless family is also the family of a depth-only format
    /// (`D32_FLOAT`, `D16_UNORM`). A view in one of these formats may be reading a depth buffer.
    pub fn is_depth_alias_candidate(self) -> bool {
        matches!(
            self.typeless(),
            DxgiFormat::R32Typeless | DxgiFormat::R16Typeless
        )
    }
}
