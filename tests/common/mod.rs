#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;

use gumdrop::api::{CloudProvider, Page};
use gumdrop::error::AppError;
use gumdrop::models::{Account, Droplet, FloatingIp, Image, Region, RegionRef, Size, Volume};
use gumdrop::prompt::Prompter;

/// Split items into pages whose cursors point at the following page.
pub fn paged<T>(pages: Vec<Vec<T>>) -> Vec<Page<T>> {
    let count = pages.len() as u32;
    pages
        .into_iter()
        .enumerate()
        .map(|(i, items)| {
            let page = i as u32 + 1;
            Page::new(items, if page < count { Some(page + 1) } else { None })
        })
        .collect()
}

fn page_of<T: Clone>(pages: &[Page<T>], page: u32) -> Page<T> {
    pages
        .get(page.saturating_sub(1) as usize)
        .cloned()
        .unwrap_or_else(|| Page::last(Vec::new()))
}

pub fn region(name: &str, slug: &str) -> Region {
    Region {
        slug: slug.to_string(),
        name: name.to_string(),
        available: true,
        sizes: Vec::new(),
        features: Vec::new(),
    }
}

pub fn region_ref(slug: &str) -> RegionRef {
    RegionRef {
        slug: slug.to_string(),
        name: String::new(),
    }
}

pub fn image(id: u64, distribution: &str, name: &str, slug: Option<&str>) -> Image {
    Image {
        id,
        name: name.to_string(),
        distribution: distribution.to_string(),
        slug: slug.map(str::to_string),
        public: true,
        regions: vec!["nyc1".to_string(), "sfo3".to_string()],
    }
}

pub fn size(slug: &str, price: f64, available: bool, regions: &[&str]) -> Size {
    Size {
        slug: slug.to_string(),
        price_monthly: price,
        price_hourly: price / 730.0,
        memory: 1024,
        vcpus: 1,
        disk: 25,
        available,
        regions: regions.iter().map(|r| r.to_string()).collect(),
    }
}

pub fn floating_ip(ip: &str, region: &str, assigned: bool) -> FloatingIp {
    FloatingIp {
        ip: ip.to_string(),
        region: region_ref(region),
        droplet: if assigned { Some(serde_json::json!({"id": 42})) } else { None },
    }
}

pub fn volume(id: &str, name: &str, region: &str, droplet_ids: Vec<u64>) -> Volume {
    Volume {
        id: id.to_string(),
        name: name.to_string(),
        region: region_ref(region),
        size_gigabytes: 10,
        droplet_ids,
    }
}

/// In-memory provider serving fixed pages and recording create calls.
pub struct FakeProvider {
    pub account: Account,
    pub regions: Vec<Page<Region>>,
    pub images: Vec<Page<Image>>,
    pub sizes: Vec<Page<Size>>,
    pub floating_ips: Vec<Page<FloatingIp>>,
    pub volumes: Vec<Page<Volume>>,
    pub droplets: Vec<Page<Droplet>>,
    /// Page of the image listing that fails with a network error.
    pub failing_image_page: Option<u32>,
    pub created_ips: RefCell<Vec<String>>,
    pub created_volumes: RefCell<Vec<(String, String, u64)>>,
    pub requested_pages: RefCell<Vec<(&'static str, u32)>>,
}

impl FakeProvider {
    /// Three regions (ams3 has no sizes), duplicate image labels across
    /// pages, and a mix of legacy/unavailable sizes.
    pub fn sample() -> Self {
        Self {
            account: Account {
                email: "ops@example.com".to_string(),
                status: "active".to_string(),
                droplet_limit: 25,
            },
            regions: paged(vec![
                vec![region("San Francisco 3", "sfo3"), region("New York 1", "nyc1")],
                vec![region("Amsterdam 3", "ams3")],
            ]),
            images: paged(vec![
                vec![
                    image(1, "Ubuntu", "22.04 (LTS) x64", Some("ubuntu-22-04-x64")),
                    image(2, "Debian", "12 x64", Some("debian-12-x64")),
                ],
                vec![
                    image(3, "Ubuntu", "22.04 (LTS) x64", Some("ubuntu-22-04-x64-v2")),
                    image(4, "Ubuntu", "my-snapshot", None),
                ],
            ]),
            sizes: paged(vec![
                vec![
                    size("s-2vcpu-2gb", 18.0, true, &["nyc1"]),
                    size("512mb", 5.0, true, &["nyc1", "sfo3"]),
                ],
                vec![
                    size("s-1vcpu-1gb", 6.0, true, &["nyc1", "sfo3"]),
                    size("s-1vcpu-512mb-10gb", 4.0, false, &["nyc1"]),
                    size("c-2", 42.0, true, &["sfo3"]),
                ],
            ]),
            floating_ips: paged(vec![
                vec![floating_ip("203.0.113.11", "nyc1", true)],
                vec![floating_ip("203.0.113.10", "nyc1", false), floating_ip("203.0.113.20", "sfo3", false)],
            ]),
            volumes: paged(vec![vec![
                volume("vol-a", "data", "nyc1", vec![]),
                volume("vol-b", "logs", "nyc1", vec![123]),
                volume("vol-c", "backup", "sfo3", vec![]),
            ]]),
            droplets: paged(vec![vec![Droplet {
                id: 7,
                name: "web-1".to_string(),
                status: "active".to_string(),
                region: region_ref("nyc1"),
            }]]),
            failing_image_page: None,
            created_ips: RefCell::new(Vec::new()),
            created_volumes: RefCell::new(Vec::new()),
            requested_pages: RefCell::new(Vec::new()),
        }
    }

    pub fn with_account_status(mut self, status: &str) -> Self {
        self.account.status = status.to_string();
        self
    }

    pub fn without_floating_ips(mut self) -> Self {
        self.floating_ips = paged(vec![vec![]]);
        self
    }

    pub fn without_volumes(mut self) -> Self {
        self.volumes = paged(vec![vec![]]);
        self
    }

    fn record(&self, kind: &'static str, page: u32) {
        self.requested_pages.borrow_mut().push((kind, page));
    }

    pub fn pages_requested(&self, kind: &str) -> Vec<u32> {
        self.requested_pages
            .borrow()
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, p)| *p)
            .collect()
    }
}

impl CloudProvider for FakeProvider {
    async fn get_account(&self) -> Result<Account, AppError> {
        Ok(self.account.clone())
    }

    async fn list_regions(&self, page: u32) -> Result<Page<Region>, AppError> {
        self.record("regions", page);
        Ok(page_of(&self.regions, page))
    }

    async fn list_images(&self, page: u32) -> Result<Page<Image>, AppError> {
        self.record("images", page);
        if self.failing_image_page == Some(page) {
            return Err(AppError::Network("connection reset by peer".to_string()));
        }
        Ok(page_of(&self.images, page))
    }

    async fn list_sizes(&self, page: u32) -> Result<Page<Size>, AppError> {
        self.record("sizes", page);
        Ok(page_of(&self.sizes, page))
    }

    async fn list_floating_ips(&self, page: u32) -> Result<Page<FloatingIp>, AppError> {
        self.record("floating_ips", page);
        Ok(page_of(&self.floating_ips, page))
    }

    async fn list_volumes(&self, page: u32) -> Result<Page<Volume>, AppError> {
        self.record("volumes", page);
        Ok(page_of(&self.volumes, page))
    }

    async fn list_droplets(&self, page: u32) -> Result<Page<Droplet>, AppError> {
        self.record("droplets", page);
        Ok(page_of(&self.droplets, page))
    }

    async fn create_floating_ip(&self, region: &str) -> Result<FloatingIp, AppError> {
        let mut created = self.created_ips.borrow_mut();
        let ip = format!("198.51.100.{}", created.len() + 1);
        created.push(region.to_string());
        Ok(floating_ip(&ip, region, false))
    }

    async fn create_volume(&self, region: &str, name: &str, size_gib: u64) -> Result<Volume, AppError> {
        let mut created = self.created_volumes.borrow_mut();
        created.push((region.to_string(), name.to_string(), size_gib));
        let id = format!("vol-new-{}", created.len());
        Ok(volume(&id, name, region, vec![]))
    }
}

#[derive(Debug, Clone)]
pub enum Answer {
    Text(&'static str),
    Number(u64),
    /// Pick the option with this exact label.
    Choose(&'static str),
    /// Pick the option at this position.
    Index(usize),
    Yes,
    No,
    Interrupt,
}

/// A recorded select prompt: message, options, default index.
#[derive(Debug, Clone)]
pub struct SelectSeen {
    pub message: String,
    pub options: Vec<String>,
    pub default: usize,
}

/// Replays a fixed list of answers and records every question asked.
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    pub asked: Vec<String>,
    pub selects: Vec<SelectSeen>,
    pub confirm_defaults: Vec<(String, bool)>,
}

impl ScriptedPrompter {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: answers.into(),
            asked: Vec::new(),
            selects: Vec::new(),
            confirm_defaults: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    pub fn times_asked(&self, message: &str) -> usize {
        self.asked.iter().filter(|m| m.as_str() == message).count()
    }

    fn next(&mut self, message: &str) -> Result<Answer, AppError> {
        self.asked.push(message.to_string());
        match self.answers.pop_front() {
            Some(Answer::Interrupt) => Err(AppError::Interrupted),
            Some(a) => Ok(a),
            None => panic!("no scripted answer left for prompt: {}", message),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn input_text(&mut self, message: &str) -> Result<String, AppError> {
        match self.next(message)? {
            Answer::Text(t) => Ok(t.to_string()),
            other => panic!("expected text answer for {:?}, got {:?}", message, other),
        }
    }

    fn input_number(&mut self, message: &str, default: u64) -> Result<u64, AppError> {
        match self.next(message)? {
            Answer::Number(n) => Ok(n),
            Answer::Text("") => Ok(default),
            other => panic!("expected number answer for {:?}, got {:?}", message, other),
        }
    }

    fn select(&mut self, message: &str, options: &[String], default: usize) -> Result<usize, AppError> {
        self.selects.push(SelectSeen {
            message: message.to_string(),
            options: options.to_vec(),
            default,
        });
        match self.next(message)? {
            Answer::Choose(label) => Ok(options
                .iter()
                .position(|o| o == label)
                .unwrap_or_else(|| panic!("{:?} is not an option of {:?}: {:?}", label, message, options))),
            Answer::Index(i) => Ok(i),
            other => panic!("expected selection for {:?}, got {:?}", message, other),
        }
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool, AppError> {
        self.confirm_defaults.push((message.to_string(), default));
        match self.next(message)? {
            Answer::Yes => Ok(true),
            Answer::No => Ok(false),
            other => panic!("expected yes/no for {:?}, got {:?}", message, other),
        }
    }
}
