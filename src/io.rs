use x86_64::instructions::port::Port;

/// Byte-wide access to the legacy I/O port space.
///
/// The interrupt controller and the keyboard both sit behind fixed port
/// numbers. Everything that talks to them takes one of these instead of
/// reaching for `in`/`out` directly, so the game never sees hardware.
pub trait PortIo {
    fn read(&mut self, port: u16) -> u8;
    fn write(&mut self, port: u16, value: u8);
}

// The real thing. Only meaningful in ring 0, which is where the kernel binary
// runs. Like the rest of the port helpers, the unsafe stays in here.
#[derive(Debug, Default, Clone, Copy)]
pub struct HardwarePorts;

impl PortIo for HardwarePorts {
    fn read(&mut self, port: u16) -> u8 {
        let mut data_port = Port::new(port);
        unsafe { data_port.read() }
    }

    fn write(&mut self, port: u16, value: u8) {
        let mut data_port = Port::new(port);
        unsafe { data_port.write(value) }
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use super::PortIo;
    use std::{
        cell::RefCell,
        collections::{HashMap, VecDeque},
        rc::Rc,
    };

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Access {
        Read(u16),
        Write(u16, u8),
    }

    // Reads come from per-port scripts (0 once a script runs dry), every
    // access lands in a shared log so a test can peek at it mid-call.
    #[derive(Debug, Default, Clone)]
    pub struct RecordingPorts {
        log: Rc<RefCell<Vec<Access>>>,
        scripts: HashMap<u16, VecDeque<u8>>,
    }

    impl RecordingPorts {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn script(mut self, port: u16, values: &[u8]) -> Self {
            self.scripts
                .entry(port)
                .or_default()
                .extend(values.iter().copied());
            self
        }

        pub fn log(&self) -> Rc<RefCell<Vec<Access>>> {
            Rc::clone(&self.log)
        }

        pub fn accesses(&self) -> Vec<Access> {
            self.log.borrow().clone()
        }

        pub fn writes(&self) -> Vec<(u16, u8)> {
            self.log
                .borrow()
                .iter()
                .filter_map(|a| match *a {
                    Access::Write(port, value) => Some((port, value)),
                    Access::Read(_) => None,
                })
                .collect()
        }
    }

    impl PortIo for RecordingPorts {
        fn read(&mut self, port: u16) -> u8 {
            self.log.borrow_mut().push(Access::Read(port));
            self.scripts
                .get_mut(&port)
                .and_then(|s| s.pop_front())
                .unwrap_or(0)
        }

        fn write(&mut self, port: u16, value: u8) {
            self.log.borrow_mut().push(Access::Write(port, value));
        }
    }
}
