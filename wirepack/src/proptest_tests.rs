#[cfg(test)]
mod proptest_tests {
    use alloc::{string::String, vec::Vec};

    use proptest::prelude::*;

    use crate::{
        ByteReader, ByteWriter, Deserializable, Serializable, SliceReader, var_u32_len,
        var_u64_len, zigzag_decode_i32, zigzag_decode_i64, zigzag_encode_i32, zigzag_encode_i64,
    };

    proptest! {
        #[test]
        fn var_u32_roundtrip(value in any::<u32>()) {
            let mut bytes = Vec::new();
            bytes.write_var_u32(value).unwrap();
            prop_assert_eq!(bytes.len(), var_u32_len(value));

            let mut reader = SliceReader::new(&bytes);
            prop_assert_eq!(reader.read_var_u32().unwrap(), value);
            prop_assert!(!reader.has_more_bytes());
        }

        #[test]
        fn var_u64_roundtrip(value in any::<u64>()) {
            let mut bytes = Vec::new();
            bytes.write_var_u64(value).unwrap();
            prop_assert_eq!(bytes.len(), var_u64_len(value));

            let mut reader = SliceReader::new(&bytes);
            prop_assert_eq!(reader.read_var_u64().unwrap(), value);
            prop_assert!(!reader.has_more_bytes());
        }

        #[test]
        fn var_u64_encoding_is_minimal(value in any::<u64>()) {
            let mut bytes = Vec::new();
            bytes.write_var_u64(value).unwrap();

            // no trailing all-zero group except for the value zero itself
            let last = *bytes.last().unwrap();
            prop_assert!(last & 0x80 == 0);
            if bytes.len() > 1 {
                prop_assert!(last != 0);
            }
        }

        #[test]
        fn var_i32_roundtrip(value in any::<i32>()) {
            let mut bytes = Vec::new();
            bytes.write_var_i32(value).unwrap();
            let mut reader = SliceReader::new(&bytes);
            prop_assert_eq!(reader.read_var_i32().unwrap(), value);
        }

        #[test]
        fn var_i64_roundtrip(value in any::<i64>()) {
            let mut bytes = Vec::new();
            bytes.write_var_i64(value).unwrap();
            let mut reader = SliceReader::new(&bytes);
            prop_assert_eq!(reader.read_var_i64().unwrap(), value);
        }

        #[test]
        fn zigzag_is_a_bijection(value in any::<i32>()) {
            prop_assert_eq!(zigzag_decode_i32(zigzag_encode_i32(value)), value);
        }

        #[test]
        fn zigzag_64_is_a_bijection(value in any::<i64>()) {
            prop_assert_eq!(zigzag_decode_i64(zigzag_encode_i64(value)), value);
        }

        #[test]
        fn fixed_width_roundtrip(
            a in any::<u16>(),
            b in any::<u32>(),
            c in any::<u64>(),
            d in any::<i64>(),
        ) {
            let mut bytes = Vec::new();
            bytes.write_u16(a).unwrap();
            bytes.write_u32(b).unwrap();
            bytes.write_u64(c).unwrap();
            bytes.write_i64(d).unwrap();

            let mut reader = SliceReader::new(&bytes);
            prop_assert_eq!(reader.read_u16().unwrap(), a);
            prop_assert_eq!(reader.read_u32().unwrap(), b);
            prop_assert_eq!(reader.read_u64().unwrap(), c);
            prop_assert_eq!(reader.read_i64().unwrap(), d);
        }

        #[test]
        fn float_roundtrip_is_bit_exact(bits32 in any::<u32>(), bits64 in any::<u64>()) {
            let mut bytes = Vec::new();
            bytes.write_f32(f32::from_bits(bits32)).unwrap();
            bytes.write_f64(f64::from_bits(bits64)).unwrap();

            let mut reader = SliceReader::new(&bytes);
            prop_assert_eq!(reader.read_f32().unwrap().to_bits(), bits32);
            prop_assert_eq!(reader.read_f64().unwrap().to_bits(), bits64);
        }

        #[test]
        fn string_roundtrip(value in ".*") {
            let mut bytes = Vec::new();
            bytes.write_string(&value).unwrap();

            let mut reader = SliceReader::new(&bytes);
            prop_assert_eq!(reader.read_string().unwrap(), value);
            prop_assert!(!reader.has_more_bytes());
        }

        #[test]
        fn prefixed_bytes_roundtrip(value in prop::collection::vec(any::<u8>(), 0..512)) {
            let mut bytes = Vec::new();
            bytes.write_prefixed_bytes(&value).unwrap();
            prop_assert_eq!(bytes.len(), var_u64_len(value.len() as u64) + value.len());

            let mut reader = SliceReader::new(&bytes);
            prop_assert_eq!(reader.read_prefixed_bytes().unwrap(), value);
        }

        #[test]
        fn sequence_roundtrip_preserves_count_and_order(
            values in prop::collection::vec(any::<u32>(), 0..64),
        ) {
            let mut bytes = Vec::new();
            bytes
                .write_sequence(values.len(), |writer, i| writer.write_var_u32(values[i]))
                .unwrap();

            let mut reader = SliceReader::new(&bytes);
            let mut reported_len = 0;
            let mut decoded = Vec::new();
            reader
                .read_sequence(
                    |len| reported_len = len,
                    |reader, _| {
                        decoded.push(reader.read_var_u32()?);
                        Ok(())
                    },
                )
                .unwrap();
            prop_assert_eq!(reported_len, values.len());
            prop_assert_eq!(decoded, values);
            prop_assert!(!reader.has_more_bytes());
        }

        #[test]
        fn object_roundtrip_preserves_key_order(
            entries in prop::collection::vec(("[a-z]{0,8}", any::<u64>()), 0..32),
        ) {
            let mut bytes = Vec::new();
            bytes
                .write_object(&entries, |writer, value| writer.write_u64(*value))
                .unwrap();

            let mut reader = SliceReader::new(&bytes);
            let mut decoded: Vec<(String, u64)> = Vec::new();
            reader
                .read_object(|reader, key| {
                    decoded.push((String::from(key), reader.read_u64()?));
                    Ok(())
                })
                .unwrap();
            prop_assert_eq!(decoded, entries);
        }

        #[test]
        fn vec_trait_roundtrip(values in prop::collection::vec(any::<i64>(), 0..64)) {
            let bytes = values.to_bytes().unwrap();
            prop_assert_eq!(Vec::<i64>::read_from_bytes(&bytes).unwrap(), values);
        }
    }
}
