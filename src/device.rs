//! Compute device selection
//!
//! Decided once at process start; every model loaded afterwards runs
//! on the same device.

use candle_core::Device;

/// Pick the best available compute device: CUDA when present,
/// otherwise CPU.
pub fn best_device() -> Device {
    match Device::cuda_if_available(0) {
        Ok(device) => {
            if device.is_cuda() {
                tracing::info!("Using CUDA device for inference");
            } else {
                tracing::debug!("CUDA not available, running on CPU");
            }
            device
        }
        Err(err) => {
            tracing::warn!("Device probe failed ({err}), falling back to CPU");
            Device::Cpu
        }
    }
}
