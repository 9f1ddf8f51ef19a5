#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityOptions {
    pub threshold: f64,
    pub trigger_once: bool,
}

impl Default for VisibilityOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            trigger_once: true,
        }
    }
}

impl VisibilityOptions {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: clamp_threshold(threshold),
            ..Self::default()
        }
    }

    pub fn trigger_once(mut self, trigger_once: bool) -> Self {
        self.trigger_once = trigger_once;
        self
    }
}

fn clamp_threshold(threshold: f64) -> f64 {
    if threshold.is_nan() {
        0.0
    } else {
        threshold.clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub ratio: f64,
    pub is_intersecting: bool,
}

impl Intersection {
    pub fn new(ratio: f64, is_intersecting: bool) -> Self {
        Self {
            ratio,
            is_intersecting,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    Continue,
    Detach,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visibility {
    options: VisibilityOptions,
    in_view: bool,
    latched: bool,
}

impl Visibility {
    pub fn new(options: VisibilityOptions) -> Self {
        Self {
            options: VisibilityOptions {
                threshold: clamp_threshold(options.threshold),
                ..options
            },
            in_view: false,
            latched: false,
        }
    }

    pub fn unsupported(options: VisibilityOptions) -> Self {
        Self {
            in_view: true,
            latched: true,
            ..Self::new(options)
        }
    }

    pub fn threshold(&self) -> f64 {
        self.options.threshold
    }

    pub fn in_view(&self) -> bool {
        self.in_view
    }

    pub fn is_latched(&self) -> bool {
        self.latched
    }

    pub fn observe(&mut self, entry: Intersection) -> Observation {
        if self.latched {
            return Observation::Detach;
        }
        self.in_view = entry.is_intersecting && entry.ratio >= self.options.threshold;
        if self.in_view && self.options.trigger_once {
            self.latched = true;
            return Observation::Detach;
        }
        Observation::Continue
    }
}
