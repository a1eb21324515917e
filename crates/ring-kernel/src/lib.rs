pub mod mock_kernel;
pub mod primitives;
pub mod traits;
pub mod truck_kernel;
pub mod types;

pub use mock_kernel::{MockKernel, OpRecord};
pub use traits::{Kernel, KernelIntrospect};
pub use truck_kernel::TruckKernel;
pub use types::{Aabb, KernelError, ProfileId, SolidHandle};
