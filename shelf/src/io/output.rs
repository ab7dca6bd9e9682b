use serde::{Deserialize, Serialize};
use stockcut::io::ext_repr::{ExtInstance, ExtSolution};

use crate::config::ShelfConfig;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ShelfOutput {
    #[serde(flatten)]
    pub instance: ExtInstance,
    pub solution: ExtSolution,
    pub config: ShelfConfig,
}
