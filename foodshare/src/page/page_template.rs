//! HTML shell of the dashboard page.
//!
//! Placeholders of the form `{{name}}` are substituted by [`super::render_page`].
//! Leaflet, Leaflet.awesome-markers and Font Awesome are loaded from CDNs.

pub const DASHBOARD_HTML: &str = r#"<!doctype html>
<html lang="en">

<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{title}}</title>

  <!-- Leaflet 1.9.4 -->
  <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.css" crossorigin="anonymous" />
  <script src="https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.js" crossorigin="anonymous"></script>
  <!-- pin icons -->
  <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/4.7.0/css/font-awesome.min.css" crossorigin="anonymous" />
  <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/Leaflet.awesome-markers/2.0.2/leaflet.awesome-markers.css" crossorigin="anonymous" />
  <script src="https://cdnjs.cloudflare.com/ajax/libs/Leaflet.awesome-markers/2.0.2/leaflet.awesome-markers.min.js" crossorigin="anonymous"></script>

  <style>
    body { margin: 0; font-family: "Source Sans Pro", system-ui, sans-serif; color: #31333f; display: flex; }
    aside { width: 18rem; min-height: 100vh; background: #f0f2f6; padding: 2rem 1.5rem; box-sizing: border-box; }
    main { flex: 1; padding: 2rem 3rem; min-width: 0; }
    h1 { margin-top: 0; }
    .slider-value { font-weight: 600; color: #ff4b4b; }
    .slider-bounds { display: flex; justify-content: space-between; font-size: 0.8rem; color: #808495; }
    input[type=range] { width: 100%; }
    .snapshot-note { font-size: 0.8rem; color: #808495; }
    .metrics { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem; margin: 1.5rem 0; }
    .metric-label { display: block; font-size: 0.9rem; }
    .metric-value { display: block; font-size: 2.25rem; }
    #map { max-width: 100%; border-radius: 0.5rem; }
    .table-wrap { max-height: 36rem; overflow: auto; border: 1px solid #e6e9ef; }
    table { border-collapse: collapse; width: 100%; font-size: 0.875rem; }
    th, td { padding: 0.25rem 0.5rem; border-bottom: 1px solid #e6e9ef; text-align: left; white-space: nowrap; }
    th { position: sticky; top: 0; background: #fafafa; }
    footer { margin-top: 2rem; border-top: 1px solid #e6e9ef; padding-top: 1rem; }
  </style>
</head>

<body data-live="{{live}}">
  <aside>
    <h2>Controls</h2>
    <form method="get" action="">
      <label for="min-surplus">Minimum surplus threshold</label>
      <div class="slider-value" id="min-surplus-value">{{threshold}}</div>
      <input type="range" id="min-surplus" name="min_surplus" min="{{min}}" max="{{max}}" step="any" value="{{threshold_raw}}" {{disabled}} />
      <div class="slider-bounds"><span>{{min_label}}</span><span>{{max_label}}</span></div>
      <noscript><button type="submit">Apply</button></noscript>
    </form>
    {{snapshot_note}}
  </aside>

  <main>
    <h1>🍽️ {{title}}</h1>
    <p>{{description}}</p>

    <section class="metrics">
      <div><span class="metric-label">High-Surplus Restaurants</span><span class="metric-value" id="metric-restaurants">{{high_surplus_restaurants}}</span></div>
      <div><span class="metric-label">NGOs Covered</span><span class="metric-value" id="metric-ngos">{{ngos_covered}}</span></div>
      <div><span class="metric-label">Avg Route Distance (km)</span><span class="metric-value" id="metric-distance">{{avg_route_distance_km}}</span></div>
    </section>

    <h3>🗺️ Donation Map</h3>
    <div id="map" style="width: {{map_width}}px; height: {{map_height}}px;"></div>

    <h3>📊 Optimized Donation Routes</h3>
    <div class="table-wrap">
      {{route_table}}
    </div>

    <footer>{{footer}}</footer>
  </main>

  <script type="application/json" id="dashboard-view">{{view_json}}</script>
  <script>
    (function () {
      const view = JSON.parse(document.getElementById('dashboard-view').textContent);
      const live = document.body.dataset.live === 'true';

      const map = L.map('map').setView(view.map.center, view.map.zoom);
      L.tileLayer(view.map.tiles_url, {
        attribution: view.map.tiles_attribution, subdomains: 'abcd', maxZoom: 20
      }).addTo(map);

      // layer order: restaurants, NGOs, routes
      const restaurantLayer = L.layerGroup().addTo(map);
      const ngoLayer = L.layerGroup().addTo(map);
      const routeLayer = L.layerGroup().addTo(map);

      function pinIcon(marker) {
        if (L.AwesomeMarkers) {
          return L.AwesomeMarkers.icon({ icon: marker.icon, markerColor: marker.color, prefix: 'fa' });
        }
        return new L.Icon.Default();
      }

      function drawRestaurants(markers) {
        restaurantLayer.clearLayers();
        markers.forEach(function (m) {
          L.circleMarker([m.lat, m.lon], {
            radius: m.radius, color: m.color, fill: m.fill, fillOpacity: m.fill_opacity
          }).bindPopup(m.popup).addTo(restaurantLayer);
        });
      }

      drawRestaurants(view.map.restaurants);
      view.map.ngos.forEach(function (m) {
        L.marker([m.lat, m.lon], { icon: pinIcon(m) }).bindPopup(m.popup).addTo(ngoLayer);
      });
      view.map.routes.forEach(function (r) {
        L.polyline(r.points, { color: r.color, weight: r.weight, opacity: r.opacity }).addTo(routeLayer);
      });

      const slider = document.getElementById('min-surplus');
      const output = document.getElementById('min-surplus-value');
      slider.addEventListener('input', function () {
        output.textContent = Number(slider.value).toFixed(2);
      });
      if (!live) return;

      slider.addEventListener('change', function () {
        const query = '?min_surplus=' + encodeURIComponent(slider.value);
        fetch('api/view' + query)
          .then(function (response) {
            if (!response.ok) throw new Error('dashboard view request failed: ' + response.status);
            return response.json();
          })
          .then(function (next) {
            document.getElementById('metric-restaurants').textContent = next.summary.high_surplus_restaurants;
            document.getElementById('metric-ngos').textContent = next.summary.ngos_covered;
            document.getElementById('metric-distance').textContent = next.summary.avg_route_distance_km;
            drawRestaurants(next.map.restaurants);
            history.replaceState(null, '', query);
          })
          .catch(function (err) { console.error(err); });
      });
    })();
  </script>
</body>

</html>
"#;
