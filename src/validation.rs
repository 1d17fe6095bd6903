use crate::config::Constraints;
use crate::error::PoolError;

/// Terms of one seed request after it has cleared the admin policy.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SeedQuote {
    pub daily_rate: i128,
    pub num_days: u32,
    pub lifetime_value: i128,
}

impl SeedQuote {
    /// Checks run in a fixed order and the first failure is reported.
    /// Allowance and custody sufficiency are not checked here.
    pub fn validate(
        constraints: &Constraints,
        daily_rate: i128,
        num_days: u32,
        ownership_satisfied: bool,
    ) -> Result<Self, PoolError> {
        if constraints.require_owned_nft && !ownership_satisfied {
            return Err(PoolError::NotTokenOwner);
        }
        if daily_rate < constraints.min_daily_rate {
            return Err(PoolError::DailyRateTooLow);
        }
        if daily_rate > constraints.max_daily_rate {
            return Err(PoolError::DailyRateTooHigh);
        }

        let lifetime_value = daily_rate
            .checked_mul(num_days as i128)
            .ok_or(PoolError::ArithmeticOverflow)?;

        if lifetime_value < constraints.min_value {
            return Err(PoolError::LifetimeValueTooLow);
        }
        if lifetime_value > constraints.max_value {
            return Err(PoolError::LifetimeValueTooHigh);
        }

        Ok(Self {
            daily_rate,
            num_days,
            lifetime_value,
        })
    }
}
