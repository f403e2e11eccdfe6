use candle_core::Device;
use tracing::debug;

/// Picks the compute device for the sentence encoder.
///
/// GPU backends are only tried when compiled in (`cuda` / `metal` features); any failure
/// there falls back to CPU with a warning.
pub fn select_device() -> Device {
    #[cfg(feature = "cuda")]
    match Device::new_cuda(0) {
        Ok(device) => {
            tracing::info!("Using CUDA GPU acceleration");
            return device;
        }
        Err(e) => tracing::warn!(error = %e, "CUDA device unavailable"),
    }

    #[cfg(feature = "metal")]
    match Device::new_metal(0) {
        Ok(device) => {
            tracing::info!("Using Metal GPU acceleration");
            return device;
        }
        Err(e) => tracing::warn!(error = %e, "Metal device unavailable"),
    }

    debug!("Using CPU device for sentence encoder");
    Device::Cpu
}
