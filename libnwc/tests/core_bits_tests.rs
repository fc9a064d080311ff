mod bits_tests {
    use libnwc_codec::core::bits::{BitSink, BitSource};

    #[test]
    fn test_msb_first_packing() {
        let mut packed = Vec::new();
        let mut sink = BitSink::new(&mut packed);
        for bit in [1u8, 0, 1, 1, 0, 0, 0, 0, 1] {
            sink.put(bit).unwrap();
        }
        sink.flush().unwrap();
        drop(sink);

        assert_eq!(packed, vec![0xB0, 0x80]);
    }

    #[test]
    fn test_flush_pads_partial_octet_low() {
        let mut packed = Vec::new();
        let mut sink = BitSink::new(&mut packed);
        sink.put(1).unwrap();
        sink.put(1).unwrap();
        sink.put(1).unwrap();
        sink.flush().unwrap();
        drop(sink);

        assert_eq!(packed, vec![0b1110_0000]);
    }

    #[test]
    fn test_flush_idempotent_on_empty_buffer() {
        let mut packed = Vec::new();
        let mut sink = BitSink::new(&mut packed);
        sink.flush().unwrap();
        sink.flush().unwrap();
        drop(sink);
        assert!(packed.is_empty());

        // and after a full octet went out, flushing adds nothing
        let mut packed = Vec::new();
        let mut sink = BitSink::new(&mut packed);
        for _ in 0..8 {
            sink.put(1).unwrap();
        }
        sink.flush().unwrap();
        sink.flush().unwrap();
        drop(sink);
        assert_eq!(packed, vec![0xFF]);
    }

    #[test]
    fn test_source_reads_msb_first() {
        let data = [0xB0u8, 0x80];
        let mut source = BitSource::new(&data[..]);

        let mut bits = Vec::new();
        while let Some(bit) = source.get().unwrap() {
            bits.push(bit);
        }
        assert_eq!(bits, vec![1, 0, 1, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_source_signals_exhaustion_repeatedly() {
        let mut source = BitSource::new(&[][..]);
        assert_eq!(source.get().unwrap(), None);
        assert_eq!(source.get().unwrap(), None);

        let mut source = BitSource::new(&[0xA5u8][..]);
        for _ in 0..8 {
            assert!(source.get().unwrap().is_some());
        }
        assert_eq!(source.get().unwrap(), None);
        assert_eq!(source.get().unwrap(), None);
    }

    #[test]
    fn test_sink_source_roundtrip() {
        // deterministic bit pattern, length not a multiple of 8
        let bits: Vec<u8> = (0u32..131).map(|i| ((i * 7 + 3) % 5 == 0) as u8).collect();

        let mut packed = Vec::new();
        let mut sink = BitSink::new(&mut packed);
        for &bit in &bits {
            sink.put(bit).unwrap();
        }
        sink.flush().unwrap();
        drop(sink);

        let mut source = BitSource::new(&packed[..]);
        for &expected in &bits {
            assert_eq!(source.get().unwrap(), Some(expected));
        }
        // padding bits are zero
        for _ in bits.len()..packed.len() * 8 {
            assert_eq!(source.get().unwrap(), Some(0));
        }
        assert_eq!(source.get().unwrap(), None);
    }
}
