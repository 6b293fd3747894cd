//! Scale engine
//!
//! Applies an ordered list of scale elements to one or more parallel
//! (Aesthetics, Data) pairs. Each element runs over every pair before the next
//! element starts, so colour scales see all panels when they build their key.
//! Later elements overwrite fields written by earlier ones.

use tracing::debug;

use crate::plot::data::{Aesthetics, Data};
use crate::plot::scale::Scale;
use crate::{GgscaleError, Result};

/// Apply `scales` to every Data, returning one fresh Aesthetics per Data
pub fn apply_scales(scales: &[Scale], datas: &[Data]) -> Result<Vec<Aesthetics>> {
    let mut aess = vec![Aesthetics::new(); datas.len()];
    apply_scales_into(scales, &mut aess, datas)?;
    Ok(aess)
}

/// Apply `scales` into caller-supplied Aesthetics, parallel to `datas`
pub fn apply_scales_into(scales: &[Scale], aess: &mut [Aesthetics], datas: &[Data]) -> Result<()> {
    if aess.len() != datas.len() {
        return Err(GgscaleError::LengthMismatch {
            aesthetics: aess.len(),
            data: datas.len(),
        });
    }

    debug!(scales = scales.len(), pairs = datas.len(), "applying scales");
    for scale in scales {
        scale.apply_scale(aess, datas)?;
    }

    for (aes, data) in aess.iter_mut().zip(datas) {
        aes.titles
            .extend(data.titles.iter().map(|(field, title)| (*field, title.clone())));
    }
    Ok(())
}
