/// Code carried by a successful [`CResult`].
pub const OK_CODE: i32 = 0;

/// Value-or-error-code pair returned by value across the C ABI.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CResult<T> {
    pub code: i32,
    pub result: T,
}

pub type CUInt64Result = CResult<u64>;
pub type CInt32Result = CResult<i32>;

impl<T: Default> CResult<T> {
    pub fn ok(result: T) -> Self {
        CResult {
            code: OK_CODE,
            result,
        }
    }

    /// `code` must not be [`OK_CODE`].
    pub fn error(code: i32) -> Self {
        debug_assert_ne!(code, OK_CODE);
        CResult {
            code,
            result: T::default(),
        }
    }
}

impl<T> CResult<T> {
    pub fn is_ok(&self) -> bool {
        self.code == OK_CODE
    }

    pub fn into_result(self) -> Result<T, i32> {
        if self.is_ok() {
            Ok(self.result)
        } else {
            Err(self.code)
        }
    }
}

impl<T: Default> From<crate::Result<T>> for CResult<T> {
    fn from(res: crate::Result<T>) -> Self {
        match res {
            Ok(value) => CResult::ok(value),
            Err(err) => CResult::error(err.code()),
        }
    }
}
