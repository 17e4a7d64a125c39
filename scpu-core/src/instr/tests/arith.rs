#[cfg(test)]
mod arith_tests {
    use crate::instr::tests::{init_with_program, validate_cpu_state, TestObserver};
    use crate::mem::Register;
    use crate::periph::{ExecEvent, NullObserver};

    #[test]
    fn arith_add_test() {
        let src = [
            // Plain additions
            (10u8, 20u8, 30u8),
            (0, 0, 0),
            (0x7F, 0x01, 0x80),
            // Wraparound past 8 bits
            (250, 10, 4),
            (200, 100, 44),
            (0xFF, 0xFF, 0xFE),
            (0xFF, 0x01, 0x00),
        ];

        for (a, b, expect) in src.iter() {
            let mut obs = NullObserver;
            let mut cpu = init_with_program(&mut obs, &[0x02, 0x00, 0x01]);
            cpu.write_reg(Register::A, *a);
            cpu.write_reg(Register::B, *b);
            cpu.step().unwrap();

            validate_cpu_state(&cpu, 3);
            assert_eq!(
                cpu.read_reg(Register::A),
                *expect,
                "Failed ADD: a: {} | b: {} | e: {} | r: {}",
                a,
                b,
                expect,
                cpu.read_reg(Register::A)
            );
            assert_eq!(cpu.read_reg(Register::B), *b, "ADD modified source");
        }
    }

    #[test]
    fn arith_add_same_register() {
        let mut obs = NullObserver;
        let mut cpu = init_with_program(&mut obs, &[0x02, 0x03, 0x03]);
        cpu.write_reg(Register::D, 0x90);
        cpu.step().unwrap();

        assert_eq!(cpu.read_reg(Register::D), 0x20);
    }

    #[test]
    fn arith_add_event() {
        let mut obs = TestObserver::default();
        {
            // ADD C, <id 7>. The unknown source id reads register A.
            let mut cpu = init_with_program(&mut obs, &[0x02, 0x02, 0x07]);
            cpu.write_reg(Register::A, 5);
            cpu.write_reg(Register::C, 6);
            cpu.step().unwrap();
            assert_eq!(cpu.read_reg(Register::C), 11);
        }
        assert_eq!(
            obs.events,
            vec![ExecEvent::Add {
                pc: 0,
                dest: Register::C,
                src: Register::A,
                result: 11
            }]
        );
    }
}
