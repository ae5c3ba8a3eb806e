use kinetix::workflows::config::DEFAULT_NUMBER_DENSITY;

pub struct DefaultsConfig {
    pub t_start: f64,
    pub t_end: f64,
    pub steps: usize,
    pub level: usize,
    pub number_density: f64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            t_start: 1000.0,
            t_end: 10000.0,
            steps: 10,
            level: 1,
            number_density: DEFAULT_NUMBER_DENSITY,
        }
    }
}
