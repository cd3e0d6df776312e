use huffman_resolver::huffman::CodeWord;

#[test]
fn a_fresh_word_is_empty() {
    let word = CodeWord::new();
    assert!(word.is_empty());
    assert_eq!(0, word.len());
    assert_eq!("", word.to_string());
    assert_eq!(Some(0), word.to_packed());
}

#[test]
fn rendering_reverses_the_push_order() {
    // Pushed leaf-to-root, as the merges assign them.
    let mut word = CodeWord::new();
    word.push(false);
    word.push(true);
    word.push(true);

    // Read root-to-leaf: last pushed bit first.
    assert_eq!("110", word.to_string());
    assert_eq!(3, word.len());
    assert!(word.bit(0));
    assert!(word.bit(1));
    assert!(!word.bit(2));
    assert_eq!(vec![true, true, false], word.iter().collect::<Vec<_>>());
}

#[test]
fn leading_zero_bits_are_significant() {
    let mut word = CodeWord::new();
    word.push(true);
    word.push(false);
    word.push(false);

    // The packed value is 1 but the rendering keeps all three bits.
    assert_eq!("001", word.to_string());
    assert_eq!(Some(1), word.to_packed());
}

#[test]
fn packed_layout_keeps_the_first_pushed_bit_at_bit_zero() {
    let mut word = CodeWord::new();
    word.push(false);
    word.push(true);
    // bit 0 = first pushed = 0, bit 1 = 1, so the integer is 0b10.
    assert_eq!(Some(0b10), word.to_packed());
}

#[test]
fn prefix_relation_follows_the_root_first_reading() {
    let mut zero = CodeWord::new();
    zero.push(false);

    let mut one = CodeWord::new();
    one.push(true);

    // "10": pushed 0 then 1.
    let mut one_zero = CodeWord::new();
    one_zero.push(false);
    one_zero.push(true);

    assert!(one.is_prefix_of(&one_zero));
    assert!(!zero.is_prefix_of(&one_zero));
    assert!(!one_zero.is_prefix_of(&one));

    // Reflexivity, and the empty word prefixes everything.
    assert!(one_zero.is_prefix_of(&one_zero));
    assert!(CodeWord::new().is_prefix_of(&one_zero));
}

#[test]
fn words_grow_past_sixty_four_bits_without_truncation() {
    let mut word = CodeWord::new();
    for index in 0..64 {
        word.push(index % 2 == 0);
    }
    assert_eq!(64, word.len());
    assert!(word.to_packed().is_some());

    word.push(true);
    assert_eq!(65, word.len());
    assert_eq!(None, word.to_packed());
    assert_eq!(65, word.to_string().len());

    // The root-most bit is the one pushed last.
    assert!(word.bit(0));
    // All 65 bits survive: the first pushed bit is still the leaf-most one.
    assert!(word.bit(64));
}
