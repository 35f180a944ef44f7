//! Shape encoders for [`BlockRmq`](crate::BlockRmq).
//!
//! Every code starts with a sentinel `1` bit so that blocks of different
//! lengths never share a code (the final block is usually shorter).

use crate::RmqError;
use crate::util::floor_log2;

/// Maps a block to an integer such that equal codes imply equal argmin
/// answers for every in-block range.
pub trait BlockEncoder<T> {
    fn default_block_size(n: usize) -> usize;

    /// Rejects inputs the encoding cannot represent.
    fn validate(values: &[T]) -> Result<(), RmqError>;

    /// `stack` is scratch space reused across blocks.
    fn shape_code(block: &[T], stack: &mut Vec<usize>) -> u64;
}

/// Keys whose neighbours can be tested for a difference of exactly one.
pub trait UnitStep {
    /// `Some(true)` if `next == self - 1`, `Some(false)` if `next == self + 1`,
    /// `None` otherwise.
    fn unit_step(&self, next: &Self) -> Option<bool>;
}

macro_rules! impl_unit_step {
    ($($t:ty),* $(,)?) => {
        $(
            impl UnitStep for $t {
                #[inline]
                fn unit_step(&self, next: &Self) -> Option<bool> {
                    if self.checked_sub(1) == Some(*next) {
                        Some(true)
                    } else if self.checked_add(1) == Some(*next) {
                        Some(false)
                    } else {
                        None
                    }
                }
            }
        )*
    };
}

impl_unit_step!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Restricted ±1 arrays: one bit per step, set when the step descends.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlusMinusOne;

impl<T: UnitStep> BlockEncoder<T> for PlusMinusOne {
    fn default_block_size(n: usize) -> usize {
        ((floor_log2(n) / 2) as usize).max(1)
    }

    fn validate(values: &[T]) -> Result<(), RmqError> {
        match values
            .windows(2)
            .position(|w| w[0].unit_step(&w[1]).is_none())
        {
            Some(position) => Err(RmqError::NotUnitStep { position }),
            None => Ok(()),
        }
    }

    fn shape_code(block: &[T], _stack: &mut Vec<usize>) -> u64 {
        let mut code = 1_u64;
        for w in block.windows(2) {
            let descends = w[0].unit_step(&w[1]) == Some(true);
            code = (code << 1) | u64::from(descends);
        }
        code
    }
}

/// General arrays: the push/pop trace of a stack-based Cartesian tree build,
/// `1` per push and `0` per pop, closed with the final pops.
#[derive(Clone, Copy, Debug, Default)]
pub struct FischerHeun;

impl<T: Ord> BlockEncoder<T> for FischerHeun {
    fn default_block_size(n: usize) -> usize {
        ((floor_log2(n) / 4) as usize).max(1)
    }

    fn validate(_values: &[T]) -> Result<(), RmqError> {
        Ok(())
    }

    fn shape_code(block: &[T], stack: &mut Vec<usize>) -> u64 {
        stack.clear();
        let mut code = 1_u64;
        for (i, v) in block.iter().enumerate() {
            while let Some(&top) = stack.last() {
                if block[top] <= *v {
                    break;
                }
                stack.pop();
                code <<= 1;
            }
            stack.push(i);
            code = (code << 1) | 1;
        }
        code << stack.len()
    }
}
