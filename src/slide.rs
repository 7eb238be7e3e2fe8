use carousel::constants::ANIMATION_DURATION;
use carousel::{EffectType, PanelRole, PanelView, Renderable};
use raylib::prelude::*;

enum Content {
    Picture(Texture2D),
    Swatch(Color),
    Missing,
}

#[derive(Clone, Copy, PartialEq)]
enum Property {
    Offset,  // Horizontal shift, in panel widths
    Opacity,
}

struct Animation {
    property: Property,
    tween: ease::Tween,
    end: f32,
    timer: f32,
}

/// One panel of the carousel with its own entrance/exit animation.
pub struct Slide {
    name: String,
    content: Content,

    offset: f32,
    opacity: f32,
    animation: Option<Animation>,

    // Last (view, revision) the animation was started for
    seen: Option<(PanelView, u64)>,
}

impl Renderable for Slide {
    fn is_renderable(&self) -> bool {
        match &self.content {
            Content::Picture(texture) => texture.width() > 0 && texture.height() > 0,
            Content::Swatch(_) => true,
            Content::Missing => false,
        }
    }
}

impl Slide {
    fn new(name: String, content: Content) -> Self {
        Self {
            name,
            content,
            offset: 0.0,
            opacity: 1.0,
            animation: None,
            seen: None,
        }
    }

    pub fn picture(name: String, texture: Texture2D) -> Self {
        Self::new(name, Content::Picture(texture))
    }

    pub fn swatch(name: String, color: Color) -> Self {
        Self::new(name, Content::Swatch(color))
    }

    pub fn missing(name: String) -> Self {
        Self::new(name, Content::Missing)
    }

    /// Starts the animation matching `view` when the slide takes part in a
    /// new transition.
    pub fn sync(&mut self, view: &PanelView, revision: u64) {
        if self.seen == Some((*view, revision)) {
            return;
        }
        self.seen = Some((*view, revision));

        self.offset = 0.0;
        self.opacity = 1.0;
        self.animation = None;

        let Some(variant) = view.variant else {
            return;
        };
        // Mirrored slides travel right to left
        let side = if variant.is_mirrored() { -1.0 } else { 1.0 };
        let (property, start, end) = match (variant.effect(), view.role) {
            (EffectType::Slide, PanelRole::Current) => (Property::Offset, side, 0.0),
            (EffectType::Slide, _) => (Property::Offset, 0.0, -side),
            (EffectType::Fade, PanelRole::Current) => (Property::Opacity, 0.0, 1.0),
            (EffectType::Fade, _) => (Property::Opacity, 1.0, 0.0),
        };
        self.set(property, start);
        self.animation = Some(Animation {
            property,
            tween: ease::Tween::new(ease::cubic_out, start, end, ANIMATION_DURATION),
            end,
            timer: 0.0,
        });
    }

    fn set(&mut self, property: Property, value: f32) {
        match property {
            Property::Offset => self.offset = value,
            Property::Opacity => self.opacity = value,
        }
    }

    pub fn update(&mut self, dt: f32) {
        let Some(animation) = self.animation.as_mut() else {
            return;
        };
        let property = animation.property;
        let mut value = animation.tween.apply(dt);
        animation.timer += dt;
        if animation.timer >= ANIMATION_DURATION {
            value = animation.end;
            self.animation = None;
        }
        self.set(property, value);
    }

    pub fn draw(&self, d: &mut impl RaylibDraw, area: Rectangle) {
        let alpha = (self.opacity.clamp(0.0, 1.0) * 255.0) as u8;
        let center = Vector2::new(
            area.x + area.width * (0.5 + self.offset),
            area.y + area.height * 0.5,
        );

        match &self.content {
            Content::Picture(texture) => {
                let tex_width = texture.width() as f32;
                let tex_height = texture.height() as f32;

                // Scale too big images to fit the area
                let scale = (area.width * 0.9 / tex_width)
                    .min(area.height * 0.9 / tex_height)
                    .min(1.0);
                let scaled_width = tex_width * scale;
                let scaled_height = tex_height * scale;

                // Relative to the dest rectangle (ie. the center of the image)
                let origin = Vector2::new(scaled_width * 0.5, scaled_height * 0.5);

                d.draw_texture_pro(
                    texture,
                    Rectangle::new(0.0, 0.0, tex_width, tex_height),
                    Rectangle::new(center.x, center.y, scaled_width, scaled_height),
                    origin,
                    0.0,
                    Color::new(255, 255, 255, alpha),
                );
            }
            Content::Swatch(color) => {
                let rect = Rectangle::new(
                    center.x - area.width * 0.5,
                    area.y,
                    area.width,
                    area.height,
                );
                d.draw_rectangle_rec(rect, Color::new(color.r, color.g, color.b, alpha));
                d.draw_text(
                    &self.name,
                    rect.x as i32 + 24,
                    rect.y as i32 + 24,
                    32,
                    Color::new(255, 255, 255, alpha),
                );
            }
            Content::Missing => {}
        }
    }
}
