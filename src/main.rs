use log::{error, info};
use macroquad::prelude::*;
use life_window::{LifeConfig, Simulation, rendering, input};

fn window_conf() -> Conf {
    let (window_width, window_height) = LifeConfig::default().window_size();
    Conf {
        window_title: "Game of Life".to_owned(),
        window_width,
        window_height,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let config = LifeConfig::default();
    let mut simulation = match Simulation::from_config(&config) {
        Ok(simulation) => simulation,
        Err(err) => {
            error!("failed to start simulation: {err}");
            return;
        }
    };

    input::capture_quit();

    loop {
        if input::quit_requested() {
            info!("quit after {} generations", simulation.generation());
            break;
        }

        clear_background(BLACK);
        rendering::draw_grid(simulation.grid(), config.cell_size);

        simulation = simulation.tick(get_frame_time());

        next_frame().await;
    }
}
