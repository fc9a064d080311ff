//! Internal model/coder contract tests

use super::*;
use crate::core::bits::{BitSink, BitSource};
use crate::core::types::{Symbol, MAX_FREQUENCY, STOP_SYMBOL};

/// every symbol's [low, high) range must invert through frequency_symbol
fn assert_queries_invert(model: &Model) {
    for symbol in 0..=STOP_SYMBOL {
        let (low, high) = model.symbol_low_high(symbol);
        assert!(low < high, "symbol {} has empty range", symbol);
        assert_eq!(model.frequency_symbol(low), symbol);
        assert_eq!(model.frequency_symbol(high - 1), symbol);
    }
}

#[test]
fn test_fresh_model_covers_frequency_scale() {
    let model = Model::new();

    // fresh state: no shift, so the table reads off directly
    assert_eq!(model.symbol_low_high(0).0, 0);
    assert_eq!(model.symbol_low_high(STOP_SYMBOL).1, MAX_FREQUENCY);

    assert_queries_invert(&model);
}

#[test]
fn test_shifted_model_still_inverts() {
    let mut model = Model::new();
    // pushes the state off-center: nonzero shift, wider distribution
    model.update_state(550);
    model.update_state(560);

    assert_queries_invert(&model);
}

#[test]
fn test_known_symbols_without_adaptation() {
    let model = Model::new();

    let mut packed = Vec::new();
    {
        let mut encoder = ArithmeticEncoder::new();
        let mut sink = BitSink::new(&mut packed);
        for symbol in [512, 512, STOP_SYMBOL] {
            encoder.encode(symbol, &model, &mut sink).unwrap();
        }
        encoder.flush(&mut sink).unwrap();
        sink.flush().unwrap();
        assert_eq!(encoder.symbols_written, 3);
    }

    let mut decoder = ArithmeticDecoder::new();
    let mut source = BitSource::new(&packed[..]);
    decoder.init(&mut source).unwrap();
    assert_eq!(decoder.bits_read, 17);

    assert_eq!(decoder.decode(&model, &mut source).unwrap(), 512);
    assert_eq!(decoder.decode(&model, &mut source).unwrap(), 512);
    assert_eq!(decoder.decode(&model, &mut source).unwrap(), STOP_SYMBOL);
    assert_eq!(decoder.symbols_read, 3);
}

#[test]
fn test_stop_symbol_only() {
    let model = Model::new();

    let mut packed = Vec::new();
    {
        let mut encoder = ArithmeticEncoder::new();
        let mut sink = BitSink::new(&mut packed);
        encoder.encode(STOP_SYMBOL, &model, &mut sink).unwrap();
        encoder.flush(&mut sink).unwrap();
        sink.flush().unwrap();
    }
    assert!(!packed.is_empty());

    let mut decoder = ArithmeticDecoder::new();
    let mut source = BitSource::new(&packed[..]);
    decoder.init(&mut source).unwrap();
    assert_eq!(decoder.decode(&model, &mut source).unwrap(), STOP_SYMBOL);
}

/// encode with adaptation, decode with adaptation, compare symbol streams
fn roundtrip(symbols: &[Symbol]) -> Vec<Symbol> {
    let mut packed = Vec::new();
    {
        let mut model = Model::new();
        let mut encoder = ArithmeticEncoder::new();
        let mut sink = BitSink::new(&mut packed);
        for &symbol in symbols {
            encoder.encode(symbol, &model, &mut sink).unwrap();
            model.update_state(symbol);
        }
        encoder.encode(STOP_SYMBOL, &model, &mut sink).unwrap();
        model.update_state(STOP_SYMBOL);
        encoder.flush(&mut sink).unwrap();
        sink.flush().unwrap();
    }

    let mut model = Model::new();
    let mut decoder = ArithmeticDecoder::new();
    let mut source = BitSource::new(&packed[..]);
    decoder.init(&mut source).unwrap();

    let mut decoded = Vec::new();
    loop {
        let symbol = decoder.decode(&model, &mut source).unwrap();
        model.update_state(symbol);
        if symbol == STOP_SYMBOL {
            break;
        }
        decoded.push(symbol);
    }
    decoded
}

#[test]
fn test_lockstep_roundtrip_random_walk() {
    // deterministic pseudo-random walk over the symbol alphabet
    let mut state = 0x2545_F491u32;
    let mut value = 512i32;
    let mut symbols = Vec::with_capacity(5000);
    for _ in 0..5000 {
        state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        let step = ((state >> 24) as i32 % 31) - 15;
        value = (value + step).clamp(0, 1023);
        symbols.push(value as Symbol);
    }

    assert_eq!(roundtrip(&symbols), symbols);
}

#[test]
fn test_lockstep_roundtrip_with_impulses() {
    let mut symbols = vec![512; 400];
    symbols[50] = 1023;
    symbols[51] = 0;
    symbols[200] = 1023;
    symbols[201] = 1023;
    symbols[202] = 1023;
    symbols[203] = 1023;
    symbols[399] = 0;

    assert_eq!(roundtrip(&symbols), symbols);
}

#[test]
fn test_lockstep_roundtrip_alphabet_extremes() {
    let symbols: Vec<Symbol> = (0..1024).chain((0..1024).rev()).collect();
    assert_eq!(roundtrip(&symbols), symbols);
}
