use divpow10_table::{render, verify_table, ReciprocalTable, TableFormat, VerifyOptions};

const GOLDEN_C_TABLE: [&str; 34] = [
    " { 0, 24, 0,  0, 0xc3c598d9, 0x33333333333335db, 0x3333333333333333, 0x0000000000000005, 0x00000000 }, //  1",
    " { 0, 24, 0,  0, 0xecf73956, 0x51eb851eb851eb8b, 0x051eb851eb851eb8, 0x0000000000000032, 0x00000000 }, //  2",
    " { 1,  0, 0, 24, 0xe4fb256b, 0x645a1cac083126fa, 0x83126e978d4fdf3b, 0x00000000000001f4, 0x00000000 }, //  3",
    " { 0, 24, 0,  0, 0x4ab8af47, 0x52bd3c36113404ea, 0x000d1b71758e2196, 0x0000000000001388, 0x00000000 }, //  4",
    " { 1,  0, 0, 24, 0xa80de8e4, 0x461f9f01b866e43a, 0x014f8b588e368f08, 0x000000000000c350, 0x00000000 }, //  5",
    " { 1,  0, 0, 24, 0x43f71d62, 0x6d698fe69270b06c, 0x00218def416bdb1a, 0x000000000007a120, 0x00000000 }, //  6",
    " { 2,  0, 0, 16, 0x32356e7d, 0xf0f4ca41d811a46d, 0x035afe535795e90a, 0x00000000004c4b40, 0x00000000 }, //  7",
    " { 2,  0, 0, 16, 0x1e9eae1a, 0x7e7ee106959b5d3e, 0x0055e63b88c230e7, 0x0000000002faf080, 0x00000000 }, //  8",
    " { 2,  0, 1, 16, 0x030fdd89, 0x59731680a88f8953, 0x00089705f4136b4a, 0x00000000001dcd65, 0x000000ff }, //  9",
    " { 4,  0, 1,  0, 0x2fbf3807, 0xb573440e5a884d1b, 0xdbe6fecebdedd5be, 0x00000000012a05f2, 0x000000ff }, // 10",
    " { 4,  0, 1,  0, 0x1e5fe796, 0xdef1ed34a2a73ae9, 0x15fd7fe17964955f, 0x000000000ba43b74, 0x000000ff }, // 11",
    " { 4,  0, 1,  0, 0x4fd663ea, 0x2fe4fe1edd10b917, 0x0232f33025bd4223, 0x00000000746a5288, 0x000000ff }, // 12",
    " { 4,  0, 1,  0, 0xee623d30, 0x84ca19697c81ac1b, 0x00384b84d092ed03, 0x000000048c273950, 0x000000ff }, // 13",
    " { 4,  0, 1,  0, 0x64a36c84, 0xc07a9c24260cf79c, 0x0005a126e1a84ae6, 0x0000002d79883d20, 0x000000ff }, // 14",
    " { 5,  1, 1,  0, 0x1057a6e3, 0xd90f9d37014bf60a, 0x00901d7cf73ab0ac, 0x000001c6bf526340, 0x000000ff }, // 15",
    " { 5,  1, 1,  0, 0x9b3bf716, 0x15b4c2ebe687989a, 0x000e69594bec44de, 0x000011c37937e080, 0x000000ff }, // 16",
    " { 6,  2, 2,  0, 0x85ff1be0, 0x92137dfd73f5a90f, 0x0170ef54646d4968, 0x000000b1a2bc2ec5, 0x0000ffff }, // 17",
    " { 6,  2, 2,  0, 0xf3ccb5fc, 0x41cebfcc8b9890e7, 0x0024e4bba3a48757, 0x000006f05b59d3b2, 0x0000ffff }, // 18",
    " { 7,  3, 2,  0, 0x94789948, 0x94acc7a78f41b0cb, 0x03b07929f6da5586, 0x00004563918244f4, 0x0000ffff }, // 19",
    " { 7,  3, 2,  0, 0xc20c0f54, 0x75447a5d8e535e7a, 0x005e72843249088d, 0x0002b5e3af16b188, 0x0000ffff }, // 20",
    " { 7,  3, 2,  0, 0xe03467ee, 0xbeed3f6fc16ebca5, 0x000971da05074da7, 0x001b1ae4d6e2ef50, 0x0000ffff }, // 21",
    " { 8,  4, 2,  0, 0x3870cb14, 0xb15324c68b12dd63, 0x00f1c90080baf72c, 0x010f0cf064dd5920, 0x0000ffff }, // 22",
    " { 8,  4, 2,  0, 0x5271ade8, 0x44eeb6e0a781e2f0, 0x00182db34012b251, 0x0a968163f0a57b40, 0x0000ffff }, // 23",
    " { 9,  5, 2,  0, 0x0b5e30d8, 0x4b1249aa59c9e4d5, 0x026af8533511d4ed, 0x69e10de76676d080, 0x0000ffff }, // 24",
    " { 9,  5, 3,  0, 0x812304e2, 0x544ea0f76f60fd48, 0x003de5a1ebb4fbb1, 0x0422ca8b0a00a425, 0x00ffffff }, // 25",
    " { 9,  5, 3,  0, 0x0ce9e6e3, 0xeed4a9b257f01954, 0x00063090312bb2c4, 0x295be96e64066972, 0x00ffffff }, // 26",
    " {10,  6, 3,  0, 0x7dca49f1, 0x48775ea264cf5534, 0x009e74d1b791e07e, 0x9d971e4fe8401e74, 0x00ffffff }, // 27",
    " {10,  6, 3,  0, 0x3fc76dcb, 0xa0d8bca9d6e18885, 0x000fd87b5f28300c, 0x27e72f1f12813088, 0x00ffffff }, // 28",
    " {11,  7, 3,  0, 0x60be2df0, 0x7c12ddc8b0274086, 0x0195a5efea6b3476, 0x8f07d736b90be550, 0x00ffffff }, // 29",
    " {11,  7, 3,  0, 0xa34637cb, 0x0c684960de6a5340, 0x00289097fdd7853f, 0x964e68233a76f520, 0x00ffffff }, // 30",
    " {11,  7, 3,  0, 0x76ba38c7, 0xe7a407567ca43b86, 0x00040e7599625a1f, 0xdf10116048a59340, 0x00ffffff }, // 31",
    " {12,  8, 3,  0, 0x7905ad8d, 0x5d33ef0c76d2c0a5, 0x0067d88f56a29cca, 0xb6a0adc2d677c080, 0x00ffffff }, // 32",
    " {12,  8, 4,  0, 0x58e6f7c1, 0xd61ecb1ad8aeacdd, 0x000a6274bbdd0fad, 0xe32246c99c60ad85, 0xffffffff }, // 33",
    " {13,  9, 4,  0, 0x7d7f2cee, 0x697ab5e277de1622, 0x0109d8792fb4c495, 0xdf56c3e01bc6c732, 0xffffffff }, // 34",
];

#[test]
fn c_table_matches_golden_rows() {
    let table = ReciprocalTable::build_parallel().unwrap();
    let rendered = render(&table, TableFormat::C).unwrap();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), GOLDEN_C_TABLE.len());
    for (n, (line, golden)) in lines.iter().zip(GOLDEN_C_TABLE.iter()).enumerate() {
        assert_eq!(line, golden, "row {}", n + 1);
    }
}

#[test]
fn rendering_is_stable_across_builds() {
    let first = render(&ReciprocalTable::build().unwrap(), TableFormat::C).unwrap();
    let second = render(&ReciprocalTable::build_parallel().unwrap(), TableFormat::C).unwrap();
    assert_eq!(first, second);
}

#[test]
fn golden_table_divides_correctly() {
    let table = ReciprocalTable::build().unwrap();
    let reports = verify_table(&table, &VerifyOptions { samples: 200, seed: 2024 }).unwrap();
    assert!(reports.iter().all(|report| report.checked == 4 + 5 * 200));
}
