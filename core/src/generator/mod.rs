use crate::*;
pub use random::*;

mod random;

pub trait BoardGenerator {
    fn generate(&mut self, config: &GameConfig) -> Result<BoardLayout>;
}
