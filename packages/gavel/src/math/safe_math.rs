use soroban_sdk::{log, Env};

use crate::error::{ErrorCode, GavelResult};

pub trait SafeMath: Sized {
    fn safe_add(self, rhs: Self, env: &Env) -> GavelResult<Self>;
    fn safe_sub(self, rhs: Self, env: &Env) -> GavelResult<Self>;
}

macro_rules! checked_impl {
    ($t:ty) => {
        impl SafeMath for $t {
            #[track_caller]
            #[inline(always)]
            fn safe_add(self, v: $t, env: &Env) -> GavelResult<$t> {
                match self.checked_add(v) {
                    Some(result) => Ok(result),
                    None => {
                        log!(env, "Math error thrown at line {}", line!());
                        Err(ErrorCode::MathError)
                    }
                }
            }

            #[track_caller]
            #[inline(always)]
            fn safe_sub(self, v: $t, env: &Env) -> GavelResult<$t> {
                match self.checked_sub(v) {
                    Some(result) => Ok(result),
                    None => {
                        log!(env, "Math error thrown at line {}", line!());
                        Err(ErrorCode::MathError)
                    }
                }
            }
        }
    };
}

checked_impl!(u128);
checked_impl!(u64);
checked_impl!(u32);
checked_impl!(i128);
checked_impl!(i64);

#[cfg(test)]
mod test {
    use crate::error::ErrorCode;
    use crate::math::safe_math::SafeMath;
    use soroban_sdk::Env;
    use test_case::test_case;

    #[test_case(1, 1 => Ok(2) ; "small values")]
    #[test_case(u64::MAX - 500, 500 => Ok(u64::MAX) ; "up to max")]
    #[test_case(u64::MAX - 500, 501 => Err(ErrorCode::MathError) ; "deadline overflow")]
    fn safe_add_u64(lhs: u64, rhs: u64) -> Result<u64, ErrorCode> {
        let env = Env::default();
        lhs.safe_add(rhs, &env)
    }

    #[test]
    fn safe_sub() {
        let env = Env::default();
        assert_eq!((180_i128).safe_sub(180, &env).unwrap(), 0);
        assert_eq!((1_u128).safe_sub(1, &env).unwrap(), 0);
        assert_eq!((0_u128).safe_sub(1, &env), Err(ErrorCode::MathError));
        assert_eq!(i128::MIN.safe_sub(1, &env), Err(ErrorCode::MathError));
    }
}
