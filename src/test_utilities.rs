use thiserror::Error;

use crate::error::{CidrRangeError, IpRangeError};

#[derive(Error, Clone, Debug)]
pub enum TestError {
    #[error("ip range merge error: {0}")]
    IpRange(#[from] IpRangeError),

    #[error("cidr range merge error: {0}")]
    CidrRange(#[from] CidrRangeError),
}

pub type TestResult = Result<(), TestError>;
