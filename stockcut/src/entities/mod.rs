mod component;
mod instance;
mod placement;
mod sheet;
mod solution;

#[doc(inline)]
pub use component::Component;
#[doc(inline)]
pub use instance::Instance;
#[doc(inline)]
pub use placement::Placement;
#[doc(inline)]
pub use sheet::Sheet;
#[doc(inline)]
pub use solution::Solution;
