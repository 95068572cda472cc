use thiserror::Error;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
pub enum CellError {
	#[error("flag index {index} is out of range for a {width}-bit flag field")]
	FlagIndexOutOfRange { index: u32, width: u32 },
}
