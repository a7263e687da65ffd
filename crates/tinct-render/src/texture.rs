//! Textures referenced by GUI draw commands.
//!
//! The host creates and fills GPU textures; this module only keeps views of
//! them under stable ids and builds the bind groups the pipeline needs.

use std::borrow::Cow;
use std::collections::HashMap;

/// Handle stored in draw commands. `0` is never handed out.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct TextureId(pub u64);

impl TextureId {
    pub const UNSET: TextureId = TextureId(0);

    #[inline]
    pub const fn is_unset(self) -> bool {
        self.0 == 0
    }
}

impl From<u64> for TextureId {
    fn from(id: u64) -> Self {
        TextureId(id)
    }
}

// ── registry ──────────────────────────────────────────────────────────────

/// Id → texture map with monotonically increasing id allocation.
///
/// Ids are not reused after `remove`, so a stale id in an old draw list can
/// never alias a newer texture.
#[derive(Debug)]
pub struct Registry<T> {
    entries: HashMap<TextureId, T>,
    next_id: u64,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::with_capacity(1),
            next_id: 1,
        }
    }
}

impl<T> Registry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under a fresh id.
    pub fn insert(&mut self, value: T) -> TextureId {
        let id = TextureId(self.next_id);
        self.next_id += 1;
        self.entries.insert(id, value);
        id
    }

    /// Stores `value` under a caller-chosen id, returning the previous entry.
    ///
    /// Used for ids the GUI layer assigns itself (e.g. its font atlas).
    /// Later `insert` calls skip past `id`.
    pub fn insert_with_id(&mut self, id: TextureId, value: T) -> Option<T> {
        if id.0 >= self.next_id {
            self.next_id = id.0 + 1;
        }
        self.entries.insert(id, value)
    }

    pub fn remove(&mut self, id: TextureId) -> Option<T> {
        self.entries.remove(&id)
    }

    #[inline]
    pub fn get(&self, id: TextureId) -> Option<&T> {
        self.entries.get(&id)
    }

    #[inline]
    pub fn get_mut(&mut self, id: TextureId) -> Option<&mut T> {
        self.entries.get_mut(&id)
    }

    #[inline]
    pub fn contains(&self, id: TextureId) -> bool {
        self.entries.contains_key(&id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TextureId, &T)> {
        self.entries.iter().map(|(id, t)| (*id, t))
    }
}

/// Registry of GPU textures used by `GuiRenderer`.
pub type TextureRegistry = Registry<GuiTexture>;

// ── sampler config ────────────────────────────────────────────────────────

/// Filtering/addressing configuration for a GUI texture.
///
/// Mirrors the subset of `wgpu::SamplerDescriptor` a GUI texture needs, minus
/// the label (owned by `GuiTexture`). Also drives `CpuTexture` sampling.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplerConfig {
    pub address_mode_u: wgpu::AddressMode,
    pub address_mode_v: wgpu::AddressMode,
    pub mag_filter: wgpu::FilterMode,
    pub min_filter: wgpu::FilterMode,
    pub mipmap_filter: wgpu::MipmapFilterMode,
    pub lod_min_clamp: f32,
    pub lod_max_clamp: f32,
    pub anisotropy_clamp: u16,
    pub border_color: Option<wgpu::SamplerBorderColor>,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::MipmapFilterMode::Nearest,
            lod_min_clamp: 0.0,
            lod_max_clamp: f32::MAX,
            anisotropy_clamp: 1,
            border_color: None,
        }
    }
}

impl SamplerConfig {
    fn to_raw<'a>(&self, label: Option<&'a str>) -> wgpu::SamplerDescriptor<'a> {
        wgpu::SamplerDescriptor {
            label,
            address_mode_u: self.address_mode_u,
            address_mode_v: self.address_mode_v,
            mag_filter: self.mag_filter,
            min_filter: self.min_filter,
            mipmap_filter: self.mipmap_filter,
            lod_min_clamp: self.lod_min_clamp,
            lod_max_clamp: self.lod_max_clamp,
            anisotropy_clamp: self.anisotropy_clamp,
            border_color: self.border_color,
            ..Default::default()
        }
    }
}

// ── gpu texture ───────────────────────────────────────────────────────────

/// A host-owned texture view plus the sampler it is read through.
///
/// The sampler and bind group are created on first use and dropped whenever
/// an input they depend on changes.
pub struct GuiTexture {
    label: Option<Cow<'static, str>>,
    view: wgpu::TextureView,
    sampler_config: SamplerConfig,
    sampler: Option<wgpu::Sampler>,
    bind_group: Option<wgpu::BindGroup>,
}

impl GuiTexture {
    pub fn new(
        label: Option<Cow<'static, str>>,
        view: wgpu::TextureView,
        sampler_config: SamplerConfig,
    ) -> Self {
        Self {
            label,
            view,
            sampler_config,
            sampler: None,
            bind_group: None,
        }
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn set_label(&mut self, label: Option<Cow<'static, str>>) {
        self.label = label;
        self.sampler = None;
        self.bind_group = None;
    }

    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    /// Replaces the view and returns the old one.
    pub fn set_view(&mut self, view: wgpu::TextureView) -> wgpu::TextureView {
        self.bind_group = None;
        std::mem::replace(&mut self.view, view)
    }

    pub fn sampler_config(&self) -> &SamplerConfig {
        &self.sampler_config
    }

    pub fn set_sampler_config(&mut self, config: SamplerConfig) {
        self.sampler_config = config;
        self.sampler = None;
        self.bind_group = None;
    }

    /// Returns the group-1 bind group, creating it against `layout` if needed.
    pub(crate) fn bind_group(
        &mut self,
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
    ) -> &wgpu::BindGroup {
        let label = self.label.as_deref();
        let sampler = &*self
            .sampler
            .get_or_insert_with(|| device.create_sampler(&self.sampler_config.to_raw(label)));
        let view = &self.view;

        self.bind_group.get_or_insert_with(|| {
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label,
                layout,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: wgpu::BindingResource::TextureView(view),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::Sampler(sampler),
                    },
                ],
            })
        })
    }
}
