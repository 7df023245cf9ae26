/// Single map section. Leaflet is only fetched in the browser; until it has
/// loaded, the container shows a same-sized placeholder. Switching region
/// removes the old map and builds a new one from the fresh plan.
pub const MAP_PAGE_HTML: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>LYTHOS siting map</title>
  <style>
    body { margin: 0; background: #000; color: #fff; font-family: system-ui, sans-serif; }
    main { max-width: 960px; margin: 0 auto; padding: 2rem 1rem; }
    nav button { background: none; border: 1px solid #444; color: inherit; border-radius: 999px;
                 padding: .35rem .9rem; margin-right: .5rem; cursor: pointer; }
    nav button.active { border-color: #34d399; color: #34d399; }
    .frame { position: relative; width: 100%; aspect-ratio: 8 / 5; margin-top: 1rem;
             border-radius: 1rem; overflow: hidden; border: 1px solid #333; }
    .frame > div { position: absolute; inset: 0; }
    .placeholder { background: #fff; }
  </style>
</head>
<body>
  <main>
    <h1>A + B: Northern Ontario Nickel &amp; NWT Lithium</h1>
    <p>Official NASA/ESA Sentinel-2 tiles with demo risk markers. Markers are illustrative.</p>
    <nav id="regions"></nav>
    <div id="frame" class="frame"><div id="slot" class="placeholder"></div></div>
  </main>

  <script>
    const API = '/api/v1';
    let leaflet = null;
    let map = null;
    let currentKey = null;
    let requestSeq = 0;

    function loadLeaflet() {
      if (leaflet) return leaflet;
      leaflet = new Promise((resolve, reject) => {
        const css = document.createElement('link');
        css.rel = 'stylesheet';
        css.href = 'https://unpkg.com/leaflet@1.9.4/dist/leaflet.css';
        document.head.appendChild(css);
        const js = document.createElement('script');
        js.src = 'https://unpkg.com/leaflet@1.9.4/dist/leaflet.js';
        js.onload = () => resolve(window.L);
        js.onerror = reject;
        document.head.appendChild(js);
      });
      return leaflet;
    }

    function tileLayer(L, t) {
      const opts = { opacity: t.opacity, zIndex: t.z_index, tileSize: t.tile_size };
      if (t.attribution) opts.attribution = t.attribution;
      if (t.subdomains) opts.subdomains = t.subdomains;
      if (t.max_native_zoom != null) opts.maxNativeZoom = t.max_native_zoom;
      return L.tileLayer(t.url_template, opts);
    }

    function markerLayer(L, markers) {
      return L.layerGroup(markers.map(m =>
        L.circleMarker([m.position.lat, m.position.lng], {
          radius: m.style.radius,
          color: m.style.stroke_color,
          weight: m.style.stroke_weight,
          fillColor: m.style.fill_color,
          fillOpacity: m.style.fill_opacity,
        }).bindTooltip(m.label, { direction: 'top', offset: m.tooltip_offset, opacity: 1 })
      ));
    }

    function sizeFrame(size) {
      const frame = document.getElementById('frame');
      frame.style.maxWidth = `${size.width}px`;
      frame.style.aspectRatio = `${size.width} / ${size.height}`;
    }

    function mount(L, plan) {
      if (map) { map.remove(); map = null; }
      const slot = document.getElementById('slot');
      const fresh = slot.cloneNode(false);
      fresh.className = '';
      slot.replaceWith(fresh);

      map = L.map(fresh, {
        center: [plan.center.lat, plan.center.lng],
        zoom: plan.zoom,
        scrollWheelZoom: plan.scroll_wheel_zoom,
      });
      const bases = {};
      const overlays = {};
      for (const entry of plan.layers) {
        const layer = entry.tiles ? tileLayer(L, entry.tiles) : markerLayer(L, entry.markers || []);
        (entry.role === 'base' ? bases : overlays)[entry.name] = layer;
        if (plan.visible_by_default.includes(entry.name)) layer.addTo(map);
      }
      L.control.layers(bases, overlays, { position: 'topright' }).addTo(map);
      currentKey = plan.key;
    }

    async function show(uri) {
      const token = ++requestSeq;
      const res = await fetch(uri);
      if (token !== requestSeq || !res.ok) return;
      const plan = (await res.json()).payload;
      if (token !== requestSeq || plan.key === currentKey) return;
      sizeFrame(plan.placeholder);
      try {
        const L = await loadLeaflet();
        if (token !== requestSeq) return;
        mount(L, plan);
      } catch (err) {
        console.warn('map library unavailable, keeping placeholder', err);
      }
    }

    async function init() {
      const res = await fetch(`${API}/regions`);
      const { regions } = (await res.json()).payload;
      const nav = document.getElementById('regions');
      for (const region of regions) {
        const btn = document.createElement('button');
        btn.textContent = region.title;
        btn.onclick = () => {
          nav.querySelectorAll('button').forEach(b => b.classList.remove('active'));
          btn.classList.add('active');
          show(`${API}/regions/${region.id}/map`);
        };
        nav.appendChild(btn);
      }
      nav.querySelector('button')?.classList.add('active');
      show(`${API}/map`);
    }

    document.addEventListener('DOMContentLoaded', init);
  </script>
</body>
</html>
"#;
