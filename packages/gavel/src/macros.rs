/// Returns `Ok(())` when `$assert` holds, otherwise logs the error code with its
/// location and returns `Err($err)`. An optional message and arguments are
/// logged after the location.
///
/// The calling module must have an `ErrorCode` type in scope.
#[macro_export]
macro_rules! validate {
    ($env:expr, $assert:expr, $err:expr) => {
        {
            if ($assert) {
                Ok(())
            } else {
                let error_code: ErrorCode = $err;
                soroban_sdk::log!($env, "Error {} thrown at line {}", error_code as u32, line!());
                Err(error_code)
            }
        }
    };
    (
        $env:expr,
        $assert:expr,
        $err:expr,
        $($arg:tt)+
    ) => {
        {
            if ($assert) {
                Ok(())
            } else {
                let error_code: ErrorCode = $err;
                soroban_sdk::log!($env, "Error {} thrown at line {}", error_code as u32, line!());
                soroban_sdk::log!($env, $($arg)+);
                Err(error_code)
            }
        }
    };
}

#[macro_export]
macro_rules! safe_increment {
    ($env:expr, $struct:expr, $value:expr) => {{
        $struct = $crate::math::safe_math::SafeMath::safe_add($struct, $value, $env)?
    }};
}

#[macro_export]
macro_rules! safe_decrement {
    ($env:expr, $struct:expr, $value:expr) => {{
        $struct = $crate::math::safe_math::SafeMath::safe_sub($struct, $value, $env)?
    }};
}

#[cfg(test)]
mod test {
    use crate::error::{ErrorCode, GavelResult};
    use soroban_sdk::Env;

    fn checked(env: &Env, ok: bool) -> GavelResult {
        validate!(env, ok, ErrorCode::MathError)
    }

    fn checked_with_message(env: &Env, amount: i128) -> GavelResult {
        validate!(env, amount >= 0, ErrorCode::MathError, "negative amount", amount)
    }

    fn bump(env: &Env, mut total: i128, delta: i128) -> GavelResult<i128> {
        safe_increment!(env, total, delta);
        Ok(total)
    }

    fn drain(env: &Env, mut total: u64, delta: u64) -> GavelResult<u64> {
        safe_decrement!(env, total, delta);
        Ok(total)
    }

    #[test]
    fn validate_passes_and_fails() {
        let env = Env::default();
        assert_eq!(checked(&env, true), Ok(()));
        assert_eq!(checked(&env, false), Err(ErrorCode::MathError));
        assert_eq!(checked_with_message(&env, 5), Ok(()));
        assert_eq!(checked_with_message(&env, -5), Err(ErrorCode::MathError));
    }

    #[test]
    fn safe_increment_and_decrement() {
        let env = Env::default();
        assert_eq!(bump(&env, 150, 200), Ok(350));
        assert_eq!(bump(&env, i128::MAX, 1), Err(ErrorCode::MathError));
        assert_eq!(drain(&env, 10, 4), Ok(6));
        assert_eq!(drain(&env, 0, 1), Err(ErrorCode::MathError));
    }
}
