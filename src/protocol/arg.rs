use bytes::{Buf, Bytes};
use std::mem;
use thiserror::Error as ThisError;

///
/// ArgError
///

#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum ArgError {
    #[error("command carries no argument")]
    Absent,

    #[error("argument 0x{} cannot be decoded as {expected}", hex::encode(.payload))]
    Mismatch {
        expected: &'static str,
        payload: Bytes,
    },
}

impl ArgError {
    fn mismatch<T: FromArg>(payload: &Bytes) -> Self {
        ArgError::Mismatch { expected: T::TYPE_NAME, payload: payload.clone() }
    }
}

/// A type a command argument can be decoded into.
///
/// Numbers are little-endian and must fill the payload exactly.
pub trait FromArg: Sized {
    const TYPE_NAME: &'static str;

    fn from_arg(payload: &Bytes) -> Result<Self, ArgError>;
}

fn exact<T: FromArg>(payload: &Bytes) -> Result<&[u8], ArgError> {
    if payload.len() == mem::size_of::<T>() {
        Ok(&payload[..])
    } else {
        Err(ArgError::mismatch::<T>(payload))
    }
}

macro_rules! impl_from_arg_le {
    ($($ty:ty => $get:ident),* $(,)?) => {
        $(
            impl FromArg for $ty {
                const TYPE_NAME: &'static str = stringify!($ty);

                fn from_arg(payload: &Bytes) -> Result<Self, ArgError> {
                    let mut buf = exact::<$ty>(payload)?;
                    Ok(buf.$get())
                }
            }
        )*
    };
}

impl_from_arg_le! {
    u8 => get_u8,
    i8 => get_i8,
    u16 => get_u16_le,
    i16 => get_i16_le,
    u32 => get_u32_le,
    i32 => get_i32_le,
    f32 => get_f32_le,
}

impl FromArg for bool {
    const TYPE_NAME: &'static str = "bool";

    fn from_arg(payload: &Bytes) -> Result<Self, ArgError> {
        match exact::<bool>(payload)? {
            [0] => Ok(false),
            [1] => Ok(true),
            _ => Err(ArgError::mismatch::<bool>(payload)),
        }
    }
}

impl FromArg for String {
    const TYPE_NAME: &'static str = "String";

    fn from_arg(payload: &Bytes) -> Result<Self, ArgError> {
        String::from_utf8(payload.to_vec())
            .map_err(|_| ArgError::mismatch::<String>(payload))
    }
}

impl FromArg for Bytes {
    const TYPE_NAME: &'static str = "Bytes";

    fn from_arg(payload: &Bytes) -> Result<Self, ArgError> {
        Ok(payload.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode<T: FromArg>(payload: &[u8]) -> Result<T, ArgError> {
        T::from_arg(&Bytes::copy_from_slice(payload))
    }

    #[test]
    fn test_bool_accepts_only_zero_and_one() {
        assert_eq!(decode::<bool>(&[0]), Ok(false));
        assert_eq!(decode::<bool>(&[1]), Ok(true));
        assert!(decode::<bool>(&[2]).is_err());
        assert!(decode::<bool>(&[0xff]).is_err());
        assert!(decode::<bool>(&[]).is_err());
        assert!(decode::<bool>(&[1, 0]).is_err());
    }

    #[test]
    fn test_numbers_are_little_endian() {
        assert_eq!(decode::<u8>(&[0xfe]), Ok(0xfe));
        assert_eq!(decode::<i8>(&[0xfe]), Ok(-2));
        assert_eq!(decode::<u16>(&[0x34, 0x12]), Ok(0x1234));
        assert_eq!(decode::<i16>(&[0xff, 0xff]), Ok(-1));
        assert_eq!(decode::<u32>(&[0x78, 0x56, 0x34, 0x12]), Ok(0x1234_5678));
        assert_eq!(decode::<i32>(&[0x00, 0x00, 0x00, 0x80]), Ok(i32::MIN));
        assert_eq!(decode::<f32>(&1.5f32.to_le_bytes()), Ok(1.5));
    }

    #[test]
    fn test_numbers_reject_wrong_width() {
        assert!(decode::<u8>(&[]).is_err());
        assert!(decode::<u16>(&[1]).is_err());
        assert!(decode::<i32>(&[1, 2, 3]).is_err());
        assert!(decode::<u32>(&[1, 2, 3, 4, 5]).is_err());
        assert!(decode::<f32>(&[0; 8]).is_err());
    }

    #[test]
    fn test_string_requires_utf8() {
        assert_eq!(decode::<String>(b"stompy"), Ok("stompy".to_string()));
        assert_eq!(decode::<String>(b""), Ok(String::new()));
        assert!(decode::<String>(&[0xc3, 0x28]).is_err());
    }

    #[test]
    fn test_bytes_pass_through() {
        assert_eq!(
            decode::<Bytes>(&[9, 8, 7]),
            Ok(Bytes::from_static(&[9, 8, 7]))
        );
    }

    #[test]
    fn test_mismatch_names_type_and_payload() {
        let err = decode::<u16>(&[0xab]).unwrap_err();

        assert_eq!(
            err,
            ArgError::Mismatch {
                expected: "u16",
                payload: Bytes::from_static(&[0xab]),
            }
        );
        assert_eq!(err.to_string(), "argument 0xab cannot be decoded as u16");
        assert_eq!(
            ArgError::Absent.to_string(),
            "command carries no argument"
        );
    }
}
