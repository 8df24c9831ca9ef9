//! Flat word encoding of view descriptors, as stored in a capture.
//!
//! Every descriptor is `[format, dimension_tag, payload...]` (the DSV inserts its flags word
//! after the tag, matching `D3D11_DEPTH_STENCIL_VIEW_DESC`), where the payload holds the fields of
//! the tagged dimension in declaration order. Dimension tags are the raw D3D11 `*_DIMENSION`
//! values.
//!
//! A tag this crate does not recognise decodes as the `Unknown` dimension with no payload rather
//! than failing, so a range computed from it covers the whole resource.

use tracing::warn;

use crate::error::{Result, ViewDescError};
use crate::format::DxgiFormat;
use crate::view::{
    BufferExSrvFlags, DsvDesc, DsvDimension, DsvFlags, RtvDesc, RtvDimension, SrvDesc,
    SrvDimension, UavBufferFlags, UavDesc, UavDimension,
};

pub type CmdWord = u32;

struct WordReader<'a> {
    desc: &'static str,
    words: &'a [CmdWord],
    cursor: usize,
}

impl<'a> WordReader<'a> {
    fn new(desc: &'static str, words: &'a [CmdWord]) -> Self {
        Self {
            desc,
            words,
            cursor: 0,
        }
    }

    fn take<const N: usize>(&mut self) -> Result<[CmdWord; N]> {
        let end = self.cursor + N;
        let Some(chunk) = self.words.get(self.cursor..end) else {
            return Err(ViewDescError::Truncated {
                desc: self.desc,
                expected: end,
                found: self.words.len(),
            });
        };
        let mut out = [0; N];
        out.copy_from_slice(chunk);
        self.cursor = end;
        Ok(out)
    }

    fn unknown_tag(&self, tag: CmdWord) {
        warn!(desc = self.desc, tag, "unrecognised view dimension; decoding as unknown");
    }
}

impl SrvDesc {
    pub fn to_words(&self) -> Vec<CmdWord> {
        let mut out = vec![self.format as CmdWord, self.dimension.tag()];
        match self.dimension {
            SrvDimension::Unknown | SrvDimension::Texture2DMs => {}
            SrvDimension::Buffer {
                first_element,
                num_elements,
            } => out.extend([first_element, num_elements]),
            SrvDimension::BufferEx {
                first_element,
                num_elements,
                flags,
            } => out.extend([first_element, num_elements, flags.bits()]),
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
            } => out.extend([most_detailed_mip, mip_levels]),
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
            } => out.extend([most_detailed_mip, mip_levels, first_array_slice, array_size]),
            SrvDimension::Texture2DMsArray {
                first_array_slice,
                array_size,
            } => out.extend([first_array_slice, array_size]),
            SrvDimension::TextureCubeArray {
                most_detailed_mip,
                mip_levels,
                first_2d_array_face,
                num_cubes,
            } => out.extend([most_detailed_mip, mip_levels, first_2d_array_face, num_cubes]),
        }
        out
    }

    pub fn from_words(words: &[CmdWord]) -> Result<Self> {
        let mut r = WordReader::new("SRV descriptor", words);
        let [format, tag] = r.take::<2>()?;

        let dimension = match tag {
            0 => SrvDimension::Unknown,
            1 => {
                let [first_element, num_elements] = r.take::<2>()?;
                SrvDimension::Buffer {
                    first_element,
                    num_elements,
                }
            }
            2 => {
                let [most_detailed_mip, mip_levels] = r.take::<2>()?;
                SrvDimension::Texture1D {
                    most_detailed_mip,
                    mip_levels,
                }
            }
            3 => {
                let [most_detailed_mip, mip_levels, first_array_slice, array_size] = r.take::<4>()?;
                SrvDimension::Texture1DArray {
                    most_detailed_mip,
                    mip_levels,
                    first_array_slice,
                    array_size,
                }
            }
            4 => {
                let [most_detailed_mip, mip_levels] = r.take::<2>()?;
                SrvDimension::Texture2D {
                    most_detailed_mip,
                    mip_levels,
                }
            }
            5 => {
                let [most_detailed_mip, mip_levels, first_array_slice, array_size] = r.take::<4>()?;
                SrvDimension::Texture2DArray {
                    most_detailed_mip,
                    mip_levels,
                    first_array_slice,
                    array_size,
                }
            }
            6 => SrvDimension::Texture2DMs,
            7 => {
                let [first_array_slice, array_size] = r.take::<2>()?;
                SrvDimension::Texture2DMsArray {
                    first_array_slice,
                    array_size,
                }
            }
            8 => {
                let [most_detailed_mip, mip_levels] = r.take::<2>()?;
                SrvDimension::Texture3D {
                    most_detailed_mip,
                    mip_levels,
                }
            }
            9 => {
                let [most_detailed_mip, mip_levels] = r.take::<2>()?;
                SrvDimension::TextureCube {
                    most_detailed_mip,
                    mip_levels,
                }
            }
            10 => {
                let [most_detailed_mip, mip_levels, first_2d_array_face, num_cubes] =
                    r.take::<4>()?;
                SrvDimension::TextureCubeArray {
                    most_detailed_mip,
                    mip_levels,
                    first_2d_array_face,
                    num_cubes,
                }
            }
            11 => {
                let [first_element, num_elements, flags] = r.take::<3>()?;
                SrvDimension::BufferEx {
                    first_element,
                    num_elements,
                    flags: BufferExSrvFlags::from_bits_truncate(flags),
                }
            }
            other => {
                r.unknown_tag(other);
                SrvDimension::Unknown
            }
        };

        Ok(Self {
            format: DxgiFormat::from_word(format),
            dimension,
        })
    }
}

impl UavDesc {
    pub fn to_words(&self) -> Vec<CmdWord> {
        let mut out = vec![self.format as CmdWord, self.dimension.tag()];
        match self.dimension {
            UavDimension::Unknown => {}
            UavDimension::Buffer {
                first_element,
                num_elements,
                flags,
            } => out.extend([first_element, num_elements, flags.bits()]),
            UavDimension::Texture1D { mip_slice } | UavDimension::Texture2D { mip_slice } => {
                out.push(mip_slice)
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
            } => out.extend([mip_slice, first_array_slice, array_size]),
            UavDimension::Texture3D {
                mip_slice,
                first_w_slice,
                w_size,
            } => out.extend([mip_slice, first_w_slice, w_size]),
        }
        out
    }

    pub fn from_words(words: &[CmdWord]) -> Result<Self> {
        let mut r = WordReader::new("UAV descriptor", words);
        let [format, tag] = r.take::<2>()?;

        let dimension = match tag {
            0 => UavDimension::Unknown,
            1 => {
                let [first_element, num_elements, flags] = r.take::<3>()?;
                UavDimension::Buffer {
                    first_element,
                    num_elements,
                    flags: UavBufferFlags::from_bits_truncate(flags),
                }
            }
            2 => {
                let [mip_slice] = r.take::<1>()?;
                UavDimension::Texture1D { mip_slice }
            }
            3 => {
                let [mip_slice, first_array_slice, array_size] = r.take::<3>()?;
                UavDimension::Texture1DArray {
                    mip_slice,
                    first_array_slice,
                    array_size,
                }
            }
            4 => {
                let [mip_slice] = r.take::<1>()?;
                UavDimension::Texture2D { mip_slice }
            }
            5 => {
                let [mip_slice, first_array_slice, array_size] = r.take::<3>()?;
                UavDimension::Texture2DArray {
                    mip_slice,
                    first_array_slice,
                    array_size,
                }
            }
            8 => {
                let [mip_slice, first_w_slice, w_size] = r.take::<3>()?;
                UavDimension::Texture3D {
                    mip_slice,
                    first_w_slice,
                    w_size,
                }
            }
            other => {
                r.unknown_tag(other);
                UavDimension::Unknown
            }
        };

        Ok(Self {
            format: DxgiFormat::from_word(format),
            dimension,
        })
    }
}

impl RtvDesc {
    pub fn to_words(&self) -> Vec<CmdWord> {
        let mut out = vec![self.format as CmdWord, self.dimension.tag()];
        match self.dimension {
            RtvDimension::Unknown | RtvDimension::Texture2DMs => {}
            RtvDimension::Buffer {
                first_element,
                num_elements,
            } => out.extend([first_element, num_elements]),
            RtvDimension::Texture1D { mip_slice } | RtvDimension::Texture2D { mip_slice } => {
                out.push(mip_slice)
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
            } => out.extend([mip_slice, first_array_slice, array_size]),
            RtvDimension::Texture2DMsArray {
                first_array_slice,
                array_size,
            } => out.extend([first_array_slice, array_size]),
            RtvDimension::Texture3D {
                mip_slice,
                first_w_slice,
                w_size,
            } => out.extend([mip_slice, first_w_slice, w_size]),
        }
        out
    }

    pub fn from_words(words: &[CmdWord]) -> Result<Self> {
        let mut r = WordReader::new("RTV descriptor", words);
        let [format, tag] = r.take::<2>()?;

        let dimension = match tag {
            0 => RtvDimension::Unknown,
            1 => {
                let [first_element, num_elements] = r.take::<2>()?;
                RtvDimension::Buffer {
                    first_element,
                    num_elements,
                }
            }
            2 => {
                let [mip_slice] = r.take::<1>()?;
                RtvDimension::Texture1D { mip_slice }
            }
            3 => {
                let [mip_slice, first_array_slice, array_size] = r.take::<3>()?;
                RtvDimension::Texture1DArray {
                    mip_slice,
                    first_array_slice,
                    array_size,
                }
            }
            4 => {
                let [mip_slice] = r.take::<1>()?;
                RtvDimension::Texture2D { mip_slice }
            }
            5 => {
                let [mip_slice, first_array_slice, array_size] = r.take::<3>()?;
                RtvDimension::Texture2DArray {
                    mip_slice,
                    first_array_slice,
                    array_size,
                }
            }
            6 => RtvDimension::Texture2DMs,
            7 => {
                let [first_array_slice, array_size] = r.take::<2>()?;
                RtvDimension::Texture2DMsArray {
                    first_array_slice,
                    array_size,
                }
            }
            8 => {
                let [mip_slice, first_w_slice, w_size] = r.take::<3>()?;
                RtvDimension::Texture3D {
                    mip_slice,
                    first_w_slice,
                    w_size,
                }
            }
            other => {
                r.unknown_tag(other);
                RtvDimension::Unknown
            }
        };

        Ok(Self {
            format: DxgiFormat::from_word(format),
            dimension,
        })
    }
}

impl DsvDesc {
    pub fn to_words(&self) -> Vec<CmdWord> {
        let mut out = vec![
            self.format as CmdWord,
            self.dimension.tag(),
            self.flags.bits(),
        ];
        match self.dimension {
            DsvDimension::Unknown | DsvDimension::Texture2DMs => {}
            DsvDimension::Texture1D { mip_slice } | DsvDimension::Texture2D { mip_slice } => {
                out.push(mip_slice)
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
            } => out.extend([mip_slice, first_array_slice, array_size]),
            DsvDimension::Texture2DMsArray {
                first_array_slice,
                array_size,
            } => out.extend([first_array_slice, array_size]),
        }
        out
    }

    pub fn from_words(words: &[CmdWord]) -> Result<Self> {
        let mut r = WordReader::new("DSV descriptor", words);
        let [format, tag, flags] = r.take::<3>()?;

        let dimension = match tag {
            0 => DsvDimension::Unknown,
            1 => {
                let [mip_slice] = r.take::<1>()?;
                DsvDimension::Texture1D { mip_slice }
            }
            2 => {
                let [mip_slice, first_array_slice, array_size] = r.take::<3>()?;
                DsvDimension::Texture1DArray {
                    mip_slice,
                    first_array_slice,
                    array_size,
                }
            }
            3 => {
                let [mip_slice] = r.take::<1>()?;
                DsvDimension::Texture2D { mip_slice }
            }
            4 => {
                let [mip_slice, first_array_slice, array_size] = r.take::<3>()?;
                DsvDimension::Texture2DArray {
                    mip_slice,
                    first_array_slice,
                    array_size,
                }
            }
            5 => DsvDimension::Texture2DMs,
            6 => {
                let [first_array_slice, array_size] = r.take::<2>()?;
                DsvDimension::Texture2DMsArray {
                    first_array_slice,
                    array_size,
                }
            }
            other => {
                r.unknown_tag(other);
                DsvDimension::Unknown
            }
        };

        Ok(Self {
            format: DxgiFormat::from_word(format),
            flags: DsvFlags::from_bits_truncate(flags),
            dimension,
        })
    }
}
