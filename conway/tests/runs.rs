use std::io;

use conway::{
    DisplayClearer, Glyphs, Grid, Phase, Simulation, SimulationConfig, TerminalClearer, TextRenderer,
};

struct SharedBuf<'a>(&'a std::cell::RefCell<Vec<u8>>);

impl io::Write for SharedBuf<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test_log::test]
fn bounded_blinker_run_prints_every_generation() {
    let grid = Grid::from_cells(3, 3, &[(1, 0), (1, 1), (1, 2)]).unwrap();
    let mut sim = Simulation::new(grid);
    let mut renderer = TextRenderer::new(Vec::new(), Glyphs::new('#', '.')).with_iteration_headers(true);
    sim.run(2, &mut renderer).unwrap();

    let text = String::from_utf8(renderer.into_inner()).unwrap();
    assert_eq!(
        text,
        "...\n###\n...\n\
         Iteration: 0\n.#.\n.#.\n.#.\n\
         Iteration: 1\n...\n###\n...\n"
    );
    assert_eq!(sim.phase(), Phase::Done);
}

#[test_log::test]
fn stream_output_alternates_clear_and_board() {
    let buf = std::cell::RefCell::new(Vec::new());
    let grid = Grid::from_cells(3, 3, &[(1, 1)]).unwrap();
    let mut sim = Simulation::new(grid);
    let mut renderer = TextRenderer::new(SharedBuf(&buf), Glyphs::new('#', '.'));
    let mut clearer = || -> io::Result<()> {
        buf.borrow_mut().extend_from_slice(b"<clear>\n");
        Ok(())
    };
    sim.stream_while(&mut renderer, &mut clearer, |_, generation| generation < 2).unwrap();

    let text = String::from_utf8(buf.into_inner()).unwrap();
    assert_eq!(
        text,
        "<clear>\n...\n.#.\n...\n\
         <clear>\n...\n...\n...\n\
         <clear>\n...\n...\n...\n"
    );
}

#[test_log::test]
fn seeded_config_runs_reproducibly() {
    let config = SimulationConfig::new(10, 12).seed(2024).iterations(5);
    let mut outputs = Vec::new();
    for _ in 0..2 {
        let mut sim = Simulation::from_config(&config).unwrap();
        let mut renderer = TextRenderer::new(Vec::new(), config.glyphs);
        sim.run(config.iterations.unwrap(), &mut renderer).unwrap();
        outputs.push(renderer.into_inner());
    }
    assert_eq!(outputs[0], outputs[1]);
    // Six boards of ten rows each.
    assert_eq!(String::from_utf8(outputs.remove(0)).unwrap().lines().count(), 60);
}

#[test_log::test]
fn terminal_clearer_writes_to_its_sink() {
    let mut clearer = TerminalClearer::new(Vec::new());
    clearer.clear().unwrap();
    assert!(!clearer.into_inner().is_empty());
}
