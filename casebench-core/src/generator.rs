//! Synthetic corpus generation through a misaligned window.
//!
//! The generator allocates `size + align` bytes on an `align`-byte boundary and
//! writes logical byte `i` at physical offset `misalign + i`. Alignment only
//! changes the access pattern of the fill loop; the produced bytes depend on
//! `seed`, `size` and `alpha` alone.

use std::io::Write;

use rand::RngCore;

use crate::buffer::{AlignedAllocator, Allocator, Buffer};
use crate::config::GenerationParams;
use crate::content::ContentModel;
use crate::error::{Error, Result};
use crate::rng::Mt19937_64;

/// A generated corpus together with the aligned block that holds it.
#[derive(Debug)]
pub struct GeneratedText {
    buffer: Buffer,
    offset: usize,
    len: usize,
}

impl GeneratedText {
    /// Generated bytes, starting at the misaligned offset.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer[self.offset..self.offset + self.len]
    }

    /// Number of generated bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing was generated.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Offset of the first generated byte from the aligned base.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Address of the first generated byte.
    pub fn start_addr(&self) -> usize {
        self.buffer.base_addr() + self.offset
    }

    /// Writes the generated bytes to `writer` and flushes it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if writing or flushing fails.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        writer.write_all(self.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Copies the generated bytes into a vector, releasing the aligned block.
    pub fn into_vec(self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }
}

impl AsRef<[u8]> for GeneratedText {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// Generates a corpus with the reference engine and an aligned allocation.
///
/// # Errors
///
/// Returns an [`Error`] if the alignment is not a power of two or the block
/// of `size + align` bytes cannot be allocated.
pub fn generate(params: &GenerationParams) -> Result<GeneratedText> {
    let allocator = AlignedAllocator::new(params.align());
    let mut rng = Mt19937_64::new(params.seed());
    generate_with(params, &allocator, &mut rng)
}

/// Generates a corpus using a caller-supplied allocator and engine.
///
/// The seed in `params` is ignored; `rng` is used as given.
///
/// # Errors
///
/// Returns an [`Error`] if allocation fails or the requested size does not
/// fit in memory on this platform.
pub fn generate_with<A, R>(
    params: &GenerationParams,
    allocator: &A,
    rng: &mut R,
) -> Result<GeneratedText>
where
    A: Allocator + ?Sized,
    R: RngCore + ?Sized,
{
    let len = usize::try_from(params.size()).map_err(|_| Error::AllocationFailed {
        capacity: usize::MAX,
    })?;
    let capacity = len
        .checked_add(params.align())
        .ok_or(Error::AllocationFailed { capacity: len })?;
    let offset = params.misalign();

    let mut buffer = Buffer::with_allocator(allocator, capacity)?;
    let window = buffer
        .window_mut(offset, len)
        .ok_or(Error::AllocationFailed { capacity })?;

    ContentModel::new(params.alpha()).fill(rng, window);

    tracing::debug!(
        size = len,
        alpha = params.alpha(),
        align = params.align(),
        misalign = offset,
        "generated synthetic text"
    );

    Ok(GeneratedText {
        buffer,
        offset,
        len,
    })
}
