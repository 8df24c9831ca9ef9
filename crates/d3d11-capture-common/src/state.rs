//! Translation of raw D3D11 pipeline-state enums into API-neutral values.
//!
//! Every translation is total: a value outside the D3D11 enum maps to the documented fallback
//! instead of failing, since captured state is displayed even when an application passed
//! garbage.

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AddressMode {
    Wrap,
    Mirror,
    ClampEdge,
    ClampBorder,
    MirrorOnce,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CompareFunc {
    Never,
    Less,
    Equal,
    LessEqual,
    Greater,
    NotEqual,
    GreaterEqual,
    AlwaysTrue,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FilterMode {
    NoFilter,
    Point,
    Linear,
    Anisotropic,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FilterFunc {
    Normal,
    Comparison,
    Minimum,
    Maximum,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TextureFilter {
    pub minify: FilterMode,
    pub magnify: FilterMode,
    pub mip: FilterMode,
    pub func: FilterFunc,
}

impl Default for TextureFilter {
    fn default() -> Self {
        Self {
            minify: FilterMode::NoFilter,
            magnify: FilterMode::NoFilter,
            mip: FilterMode::NoFilter,
            func: FilterFunc::Normal,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum LogicOp {
    Clear,
    And,
    AndReverse,
    Copy,
    AndInverted,
    NoOp,
    Xor,
    Or,
    Nor,
    Equivalent,
    Invert,
    OrReverse,
    CopyInverted,
    OrInverted,
    Nand,
    Set,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BlendMultiplier {
    Zero,
    One,
    SrcCol,
    InvSrcCol,
    DstCol,
    InvDstCol,
    SrcAlpha,
    InvSrcAlpha,
    DstAlpha,
    InvDstAlpha,
    FactorRgb,
    InvFactorRgb,
    FactorAlpha,
    InvFactorAlpha,
    SrcAlphaSat,
    Src1Col,
    InvSrc1Col,
    Src1Alpha,
    InvSrc1Alpha,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BlendOp {
    Add,
    Subtract,
    ReversedSubtract,
    Minimum,
    Maximum,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum StencilOp {
    Keep,
    Zero,
    Replace,
    IncSat,
    DecSat,
    Invert,
    IncWrap,
    DecWrap,
}

/// `D3D11_TEXTURE_ADDRESS_MODE`. Falls back to [`AddressMode::Wrap`].
pub fn translate_address_mode(raw: u32) -> AddressMode {
    match raw {
        1 => AddressMode::Wrap,
        2 => AddressMode::Mirror,
        3 => AddressMode::ClampEdge,
        4 => AddressMode::ClampBorder,
        5 => AddressMode::MirrorOnce,
        _ => AddressMode::Wrap,
    }
}

/// `D3D11_COMPARISON_FUNC`. Falls back to [`CompareFunc::AlwaysTrue`].
pub fn translate_compare_func(raw: u32) -> CompareFunc {
    match raw {
        1 => CompareFunc::Never,
        2 => CompareFunc::Less,
        3 => CompareFunc::Equal,
        4 => CompareFunc::LessEqual,
        5 => CompareFunc::Greater,
        6 => CompareFunc::NotEqual,
        7 => CompareFunc::GreaterEqual,
        8 => CompareFunc::AlwaysTrue,
        _ => CompareFunc::AlwaysTrue,
    }
}

const FILTER_ANISOTROPIC: u32 = 0x55;
const FILTER_COMPARISON_BASE: u32 = 0x80;
const FILTER_MINIMUM_BASE: u32 = 0x100;
const FILTER_MAXIMUM_BASE: u32 = 0x180;
/// Min/mag/mip bits shared by every filter family.
const FILTER_BASIC_MASK: u32 = 0x7f;

/// `D3D11_FILTER`, split into per-stage modes and the reduction function.
///
/// Unrecognised min/mag/mip combinations leave all three modes at [`FilterMode::NoFilter`].
pub fn translate_filter(raw: u32) -> TextureFilter {
    let family = |base: u32| (base..=base + FILTER_ANISOTROPIC).contains(&raw);

    let (func, basic) = if family(FILTER_COMPARISON_BASE) {
        (FilterFunc::Comparison, raw & FILTER_BASIC_MASK)
    } else if family(FILTER_MINIMUM_BASE) {
        (FilterFunc::Minimum, raw & FILTER_BASIC_MASK)
    } else if family(FILTER_MAXIMUM_BASE) {
        (FilterFunc::Maximum, raw & FILTER_BASIC_MASK)
    } else {
        (FilterFunc::Normal, raw)
    };

    use FilterMode::{Anisotropic, Linear, Point};
    let (minify, magnify, mip) = match basic {
        0x00 => (Point, Point, Point),
        0x01 => (Point, Point, Linear),
        0x04 => (Point, Linear, Point),
        0x05 => (Point, Linear, Linear),
        0x10 => (Linear, Point, Point),
        0x11 => (Linear, Point, Linear),
        0x14 => (Linear, Linear, Point),
        0x15 => (Linear, Linear, Linear),
        FILTER_ANISOTROPIC => (Anisotropic, Anisotropic, Anisotropic),
        _ => {
            return TextureFilter {
                func,
                ..TextureFilter::default()
            }
        }
    };

    TextureFilter {
        minify,
        magnify,
        mip,
        func,
    }
}

/// `D3D11_LOGIC_OP`. Falls back to [`LogicOp::NoOp`].
pub fn translate_logic_op(raw: u32) -> LogicOp {
    match raw {
        0 => LogicOp::Clear,
        1 => LogicOp::Set,
        2 => LogicOp::Copy,
        3 => LogicOp::CopyInverted,
        4 => LogicOp::NoOp,
        5 => LogicOp::Invert,
        6 => LogicOp::And,
        7 => LogicOp::Nand,
        8 => LogicOp::Or,
        9 => LogicOp::Nor,
        10 => LogicOp::Xor,
        11 => LogicOp::Equivalent,
        12 => LogicOp::AndReverse,
        13 => LogicOp::AndInverted,
        14 => LogicOp::OrReverse,
        15 => LogicOp::OrInverted,
        _ => LogicOp::NoOp,
    }
}

/// `D3D11_BLEND`. The blend-factor pair resolves to the alpha or RGB factor depending on which
/// half of the blend equation it is used in. Falls back to [`BlendMultiplier::One`].
pub fn translate_blend_multiplier(raw: u32, alpha: bool) -> BlendMultiplier {
    match raw {
        1 => BlendMultiplier::Zero,
        2 => BlendMultiplier::One,
        3 => BlendMultiplier::SrcCol,
        4 => BlendMultiplier::InvSrcCol,
        5 => BlendMultiplier::SrcAlpha,
        6 => BlendMultiplier::InvSrcAlpha,
        7 => BlendMultiplier::DstAlpha,
        8 => BlendMultiplier::InvDstAlpha,
        9 => BlendMultiplier::DstCol,
        10 => BlendMultiplier::InvDstCol,
        11 => BlendMultiplier::SrcAlphaSat,
        14 if alpha => BlendMultiplier::FactorAlpha,
        14 => BlendMultiplier::FactorRgb,
        15 if alpha => BlendMultiplier::InvFactorAlpha,
        15 => BlendMultiplier::InvFactorRgb,
        16 => BlendMultiplier::Src1Col,
        17 => BlendMultiplier::InvSrc1Col,
        18 => BlendMultiplier::Src1Alpha,
        19 => BlendMultiplier::InvSrc1Alpha,
        _ => BlendMultiplier::One,
    }
}

/// `D3D11_BLEND_OP`. Falls back to [`BlendOp::Add`].
pub fn translate_blend_op(raw: u32) -> BlendOp {
    match raw {
        1 => BlendOp::Add,
        2 => BlendOp::Subtract,
        3 => BlendOp::ReversedSubtract,
        4 => BlendOp::Minimum,
        5 => BlendOp::Maximum,
        _ => BlendOp::Add,
    }
}

/// `D3D11_STENCIL_OP`. Falls back to [`StencilOp::Keep`].
pub fn translate_stencil_op(raw: u32) -> StencilOp {
    match raw {
        1 => StencilOp::Keep,
        2 => StencilOp::Zero,
        3 => StencilOp::Replace,
        4 => StencilOp::IncSat,
        5 => StencilOp::DecSat,
        6 => StencilOp::Invert,
        7 => StencilOp::IncWrap,
        8 => StencilOp::DecWrap,
        _ => StencilOp::Keep,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_decodes_basic_modes() {
        assert_eq!(
            translate_filter(0x11),
            TextureFilter {
                minify: FilterMode::Linear,
                magnify: FilterMode::Point,
                mip: FilterMode::Linear,
                func: FilterFunc::Normal,
            }
        );
        assert_eq!(translate_filter(0x55).minify, FilterMode::Anisotropic);
    }

    #[test]
    fn filter_families_include_their_anisotropic_member() {
        // D3D11_FILTER_COMPARISON_ANISOTROPIC
        let f = translate_filter(0xd5);
        assert_eq!(f.func, FilterFunc::Comparison);
        assert_eq!(f.mip, FilterMode::Anisotropic);

        // D3D11_FILTER_MINIMUM_MIN_MAG_MIP_LINEAR
        let f = translate_filter(0x115);
        assert_eq!(f.func, FilterFunc::Minimum);
        assert_eq!(f.minify, FilterMode::Linear);

        // D3D11_FILTER_MAXIMUM_MIN_POINT_MAG_LINEAR_MIP_POINT
        let f = translate_filter(0x184);
        assert_eq!(f.func, FilterFunc::Maximum);
        assert_eq!(
            (f.minify, f.magnify, f.mip),
            (FilterMode::Point, FilterMode::Linear, FilterMode::Point)
        );
    }

    #[test]
    fn unrecognised_filter_bits_yield_no_filter() {
        let f = translate_filter(0x02);
        assert_eq!(f, TextureFilter::default());

        let f = translate_filter(0x82);
        assert_eq!(f.func, FilterFunc::Comparison);
        assert_eq!(f.minify, FilterMode::NoFilter);
    }

    #[test]
    fn blend_factor_depends_on_equation_half() {
        assert_eq!(translate_blend_multiplier(14, false), BlendMultiplier::FactorRgb);
        assert_eq!(translate_blend_multiplier(14, true), BlendMultiplier::FactorAlpha);
        assert_eq!(translate_blend_multiplier(15, true), BlendMultiplier::InvFactorAlpha);
        assert_eq!(translate_blend_multiplier(9, true), BlendMultiplier::DstCol);
    }

    #[test]
    fn out_of_range_values_use_fallbacks() {
        assert_eq!(translate_address_mode(0), AddressMode::Wrap);
        assert_eq!(translate_compare_func(0), CompareFunc::AlwaysTrue);
        assert_eq!(translate_logic_op(16), LogicOp::NoOp);
        assert_eq!(translate_blend_multiplier(12, false), BlendMultiplier::One);
        assert_eq!(translate_blend_op(0), BlendOp::Add);
        assert_eq!(translate_stencil_op(9), StencilOp::Keep);
    }

    #[test]
    fn in_range_values_map_one_to_one() {
        assert_eq!(translate_address_mode(5), AddressMode::MirrorOnce);
        assert_eq!(translate_compare_func(4), CompareFunc::LessEqual);
        assert_eq!(translate_logic_op(11), LogicOp::Equivalent);
        assert_eq!(translate_blend_op(3), BlendOp::ReversedSubtract);
        assert_eq!(translate_stencil_op(7), StencilOp::IncWrap);
    }
}
