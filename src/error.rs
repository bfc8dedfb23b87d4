//! Error types for ringswarm.
//!
//! [`SwarmError`] covers the two failure kinds of the core (drawing surface
//! gone, particle storage unobtainable). [`GpuError`] and [`SimulationError`]
//! cover window and GPU setup for the interactive runner.

use std::collections::TryReserveError;
use std::fmt;

/// Errors raised by the particle store, the rasterizer and the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwarmError {
    /// The drawing surface is gone, not ready, or rejected a draw call.
    ///
    /// Aborts the current frame only; particle state is untouched.
    SurfaceUnavailable(String),
    /// Particle (or frame) storage could not be obtained.
    AllocationFailure(String),
}

impl SwarmError {
    /// Shorthand for [`SwarmError::SurfaceUnavailable`].
    pub fn surface(reason: impl Into<String>) -> Self {
        SwarmError::SurfaceUnavailable(reason.into())
    }

    /// Whether the frame loop must stop after this error.
    pub fn is_fatal(&self) -> bool {
        matches!(self, SwarmError::AllocationFailure(_))
    }

    pub(crate) fn allocation(what: &str, count: usize, source: TryReserveError) -> Self {
        SwarmError::AllocationFailure(format!("{} ({} elements): {}", what, count, source))
    }
}

impl fmt::Display for SwarmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwarmError::SurfaceUnavailable(reason) => write!(f, "Drawing surface unavailable: {}", reason),
            SwarmError::AllocationFailure(what) => write!(f, "Failed to allocate {}", what),
        }
    }
}

impl std::error::Error for SwarmError {}

/// Errors that can occur during GPU initialization.
#[derive(Debug)]
pub enum GpuError {
    /// Failed to create a surface for the window.
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    NoAdapter,
    /// Failed to create GPU device.
    DeviceCreation(wgpu::RequestDeviceError),
}

impl fmt::Display for GpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpuError::SurfaceCreation(e) => write!(f, "Failed to create GPU surface: {}", e),
            GpuError::NoAdapter => write!(f, "No compatible GPU adapter found. Ensure your system has a GPU with WebGPU/Vulkan/Metal/DX12 support."),
            GpuError::DeviceCreation(e) => write!(f, "Failed to create GPU device: {}", e),
        }
    }
}

impl std::error::Error for GpuError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GpuError::SurfaceCreation(e) => Some(e),
            GpuError::DeviceCreation(e) => Some(e),
            GpuError::NoAdapter => None,
        }
    }
}

impl From<wgpu::CreateSurfaceError> for GpuError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        GpuError::SurfaceCreation(e)
    }
}

impl From<wgpu::RequestDeviceError> for GpuError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        GpuError::DeviceCreation(e)
    }
}

/// Errors that end a [`Simulation`](crate::Simulation) run.
#[derive(Debug)]
pub enum SimulationError {
    /// Failed to create or run the event loop.
    EventLoop(winit::error::EventLoopError),
    /// Failed to create the window.
    Window(winit::error::OsError),
    /// GPU initialization failed.
    Gpu(GpuError),
    /// A fatal core error (allocation failure, or persistent surface loss).
    Swarm(SwarmError),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::EventLoop(e) => write!(f, "Event loop error: {}", e),
            SimulationError::Window(e) => write!(f, "Failed to create window: {}", e),
            SimulationError::Gpu(e) => write!(f, "GPU error: {}", e),
            SimulationError::Swarm(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimulationError::EventLoop(e) => Some(e),
            SimulationError::Window(e) => Some(e),
            SimulationError::Gpu(e) => Some(e),
            SimulationError::Swarm(e) => Some(e),
        }
    }
}

impl From<winit::error::EventLoopError> for SimulationError {
    fn from(e: winit::error::EventLoopError) -> Self {
        SimulationError::EventLoop(e)
    }
}

impl From<winit::error::OsError> for SimulationError {
    fn from(e: winit::error::OsError) -> Self {
        SimulationError::Window(e)
    }
}

impl From<GpuError> for SimulationError {
    fn from(e: GpuError) -> Self {
        SimulationError::Gpu(e)
    }
}

impl From<SwarmError> for SimulationError {
    fn from(e: SwarmError) -> Self {
        SimulationError::Swarm(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_allocation_failure_is_fatal() {
        assert!(!SwarmError::surface("gone").is_fatal());
        assert!(SwarmError::AllocationFailure("particles".into()).is_fatal());
    }

    #[test]
    fn test_allocation_message_names_request() {
        let source = Vec::<u64>::new().try_reserve_exact(usize::MAX).unwrap_err();
        let err = SwarmError::allocation("particles", 6911, source);
        let msg = err.to_string();
        assert!(msg.starts_with("Failed to allocate particles (6911 elements)"));
    }

    #[test]
    fn test_simulation_error_wraps_swarm_error() {
        let err: SimulationError = SwarmError::surface("minimized").into();
        assert_eq!(err.to_string(), "Drawing surface unavailable: minimized");
        assert!(std::error::Error::source(&err).is_some());
    }
}
