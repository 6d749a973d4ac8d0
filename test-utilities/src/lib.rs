use thiserror::Error;


#[derive(Error, Clone, Debug)]
pub enum TestError {
    #[error("ip range merge error: {0}")]
    IpRange(#[from] range_merge::error::IpRangeError),

    #[error("cidr range merge error: {0}")]
    CidrRange(#[from] range_merge::error::CidrRangeError),
}

pub type TestResult = Result<(), TestError>;
