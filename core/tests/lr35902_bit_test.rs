use lumen_core::cpu::Lr35902;

mod common;
use common::TestBus;

const Z: u8 = 0x80;
const N: u8 = 0x40;
const H: u8 = 0x20;
const C: u8 = 0x10;

fn step(cpu: &mut Lr35902, bus: &mut TestBus) -> u8 {
    cpu.step(bus).expect("defined opcode")
}

#[test]
fn test_rlc_register() {
    let mut cpu = Lr35902::new();
    let mut bus = TestBus::new();
    cpu.pc = 0;
    cpu.b = 0x85;
    cpu.f = 0x00;
    bus.load(0, &[0xCB, 0x00]); // RLC B

    let cycles = step(&mut cpu, &mut bus);

    assert_eq!(cpu.b, 0x0B);
    assert_eq!(cpu.f, C);
    assert_eq!(cycles, 2);
    assert_eq!(cpu.pc, 2);
}

#[test]
fn test_rlc_zero_result() {
    let mut cpu = Lr35902::new();
    let mut bus = TestBus::new();
    cpu.pc = 0;
    cpu.b = 0x00;
    cpu.f = C;
    bus.load(0, &[0xCB, 0x00]);

    step(&mut cpu, &mut bus);

    assert_eq!(cpu.b, 0x00);
    assert_eq!(cpu.f, Z);
}

#[test]
fn test_rrc_register() {
    let mut cpu = Lr35902::new();
    let mut bus = TestBus::new();
    cpu.pc = 0;
    cpu.c = 0x01;
    cpu.f = 0x00;
    bus.load(0, &[0xCB, 0x09]); // RRC C

    step(&mut cpu, &mut bus);

    assert_eq!(cpu.c, 0x80);
    assert_eq!(cpu.f, C);
}

#[test]
fn test_rl_through_carry() {
    // RL C with carry clear: bit 7 out, 0 in. The boot ROM's scrolling
    // logo check leans on this pair.
    let mut cpu = Lr35902::new();
    let mut bus = TestBus::new();
    cpu.pc = 0;
    cpu.c = 0x80;
    cpu.f = 0x00;
    bus.load(0, &[0xCB, 0x11, 0xCB, 0x11]); // RL C; RL C

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.c, 0x00);
    assert_eq!(cpu.f, Z | C);

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.c, 0x01);
    assert_eq!(cpu.f, 0x00);
}

#[test]
fn test_rr_through_carry() {
    let mut cpu = Lr35902::new();
    let mut bus = TestBus::new();
    cpu.pc = 0;
    cpu.d = 0x01;
    cpu.f = 0x00;
    bus.load(0, &[0xCB, 0x1A, 0xCB, 0x1A]); // RR D; RR D

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.d, 0x00);
    assert_eq!(cpu.f, Z | C);

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.d, 0x80);
    assert_eq!(cpu.f, 0x00);
}

#[test]
fn test_sla_sra_srl() {
    let mut cpu = Lr35902::new();
    let mut bus = TestBus::new();

    // SLA: 0xC0 → 0x80, carry out
    cpu.pc = 0;
    cpu.e = 0xC0;
    cpu.f = 0x00;
    bus.load(0, &[0xCB, 0x23]); // SLA E
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.e, 0x80);
    assert_eq!(cpu.f, C);

    // SRA keeps the sign bit
    cpu.pc = 0;
    cpu.e = 0x81;
    cpu.f = 0x00;
    bus.load(0, &[0xCB, 0x2B]); // SRA E
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.e, 0xC0);
    assert_eq!(cpu.f, C);

    // SRL always shifts in zero
    cpu.pc = 0;
    cpu.e = 0x81;
    cpu.f = 0x00;
    bus.load(0, &[0xCB, 0x3B]); // SRL E
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.e, 0x40);
    assert_eq!(cpu.f, C);
}

#[test]
fn test_swap() {
    let mut cpu = Lr35902::new();
    let mut bus = TestBus::new();
    cpu.pc = 0;
    cpu.a = 0xF1;
    cpu.f = N | H | C;
    bus.load(0, &[0xCB, 0x37]); // SWAP A

    step(&mut cpu, &mut bus);

    assert_eq!(cpu.a, 0x1F);
    assert_eq!(cpu.f, 0x00);

    cpu.pc = 0;
    cpu.a = 0x00;
    bus.load(0, &[0xCB, 0x37]);
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.f, Z);
}

#[test]
fn test_bit_flags() {
    // BIT 7,H: Z reflects the complement of the bit, H set, C preserved
    let mut cpu = Lr35902::new();
    let mut bus = TestBus::new();
    cpu.pc = 0;
    cpu.h = 0x80;
    cpu.f = C;
    bus.load(0, &[0xCB, 0x7C]); // BIT 7,H

    let cycles = step(&mut cpu, &mut bus);
    assert_eq!(cpu.f, H | C);
    assert_eq!(cycles, 2);

    cpu.pc = 0;
    cpu.h = 0x00;
    cpu.f = 0x00;
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.f, Z | H);
}

#[test]
fn test_bit_does_not_write() {
    let mut cpu = Lr35902::new();
    let mut bus = TestBus::new();
    cpu.pc = 0;
    cpu.set_hl(0xC000);
    bus.memory[0xC000] = 0xFF;
    bus.load(0, &[0xCB, 0x46]); // BIT 0,(HL)

    let cycles = step(&mut cpu, &mut bus);

    assert_eq!(bus.memory[0xC000], 0xFF);
    // Read-only (HL) form costs 3, not 4
    assert_eq!(cycles, 3);
}

#[test]
fn test_res_set_register() {
    let mut cpu = Lr35902::new();
    let mut bus = TestBus::new();
    cpu.pc = 0;
    cpu.a = 0xFF;
    cpu.f = 0xF0;
    bus.load(0, &[0xCB, 0x87, 0xCB, 0xC7]); // RES 0,A; SET 0,A

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.a, 0xFE);
    // RES and SET leave flags alone
    assert_eq!(cpu.f, 0xF0);

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.a, 0xFF);
    assert_eq!(cpu.f, 0xF0);
}

#[test]
fn test_res_set_hl_memory() {
    let mut cpu = Lr35902::new();
    let mut bus = TestBus::new();
    cpu.pc = 0;
    cpu.set_hl(0xC020);
    bus.memory[0xC020] = 0x00;
    bus.load(0, &[0xCB, 0xFE, 0xCB, 0xBE]); // SET 7,(HL); RES 7,(HL)

    let cycles = step(&mut cpu, &mut bus);
    assert_eq!(bus.memory[0xC020], 0x80);
    assert_eq!(cycles, 4);

    let cycles = step(&mut cpu, &mut bus);
    assert_eq!(bus.memory[0xC020], 0x00);
    assert_eq!(cycles, 4);
}

#[test]
fn test_rotate_hl_memory_cycles() {
    let mut cpu = Lr35902::new();
    let mut bus = TestBus::new();
    cpu.pc = 0;
    cpu.set_hl(0xC040);
    cpu.f = 0x00;
    bus.memory[0xC040] = 0x80;
    bus.load(0, &[0xCB, 0x16]); // RL (HL)

    let cycles = step(&mut cpu, &mut bus);

    assert_eq!(bus.memory[0xC040], 0x00);
    assert_eq!(cpu.f, Z | C);
    assert_eq!(cycles, 4);
}

#[test]
fn test_every_cb_opcode_is_defined() {
    // The CB table has no holes: all 256 opcodes execute without faulting
    let mut cpu = Lr35902::new();
    let mut bus = TestBus::new();
    for opcode in 0..=255u8 {
        cpu.pc = 0;
        cpu.set_hl(0xC800);
        bus.load(0, &[0xCB, opcode]);

        let result = cpu.step(&mut bus);
        assert!(result.is_ok(), "CB {opcode:#04x} faulted");
        assert_eq!(cpu.pc, 2);
        assert_eq!(cpu.f & 0x0F, 0);
    }
}
