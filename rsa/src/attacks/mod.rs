pub mod fermat;
pub mod wiener;

pub use fermat::FermatAttack;
pub use wiener::{ContinuedFractionTerm, WienerAttack, WienerAttackResult};
